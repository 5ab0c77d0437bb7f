// Copyright 2026 the Scrive Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core runtime for scrive: attribute-driven textual serialization.
//!
//! A concrete type declares, once, the ordered list of fields that
//! participate in serialization. That list becomes the type's
//! [`Registry`], a per-type singleton built on first use and immutable
//! for the rest of the process. The generic engine walks the registry
//! to write any instance to text or assign one back from text; the
//! concrete grammar belongs to a pluggable [`OutputPolicy`], with
//! [`Json`] as the default.
//!
//! Opting in takes one of two forms:
//!
//! - **Explicit list** — build a [`Fields`] value naming each field
//!   with its accessor pair and hand it to [`registry::register`]:
//!
//! ```
//! use scrive_core::{registry, Fields, Registry, Serializable};
//!
//! #[derive(Default, PartialEq, Debug)]
//! struct Tag {
//!     id: u32,
//! }
//!
//! impl Serializable for Tag {
//!     fn registry() -> &'static Registry<Tag> {
//!         registry::register(
//!             Fields::new().field("id", |t: &Tag| &t.id, |t: &mut Tag, v| t.id = v),
//!         )
//!     }
//! }
//!
//! let tag = Tag { id: 12 };
//! assert_eq!(tag.to_text(), r#"{"id":12}"#);
//! assert_eq!(Tag::from_text(r#"{"id":12}"#).unwrap(), tag);
//! ```
//!
//! - **Reflectible** — implement (or derive, from `scrive-derive`) the
//!   [`Reflectible`] capability and let
//!   [`registry::register_reflectible`] pull the list. Using the
//!   zero-argument path on a type without the capability is a compile
//!   error, never a runtime one.
//!
//! Registration is first-wins: once a registry exists for a type,
//! later lists are silently discarded and everyone shares the original.

pub mod engine;
pub mod error;
pub mod field;
pub mod mode;
pub mod policy;
pub mod registry;
pub mod serializable;
pub mod source;

pub use error::Error;
pub use field::{Field, Fields};
pub use mode::{Mode, ReadWrite, Reversibility, WriteOnly};
pub use policy::{Json, KeyValue, OutputPolicy, Parse, Render};
pub use registry::Registry;
pub use serializable::{Reflectible, Serializable};
pub use source::Source;
