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

//! # Scrive
//!
//! Attribute-driven textual serialization: a type declares its fields
//! once, and every instance gains conversion to and from text with no
//! per-type serialization code. The grammar is owned by a swappable
//! output policy; the default renders a JSON object whose key order is
//! the registration order.
//!
//! ## Deriving the opt-in
//!
//! ```
//! use scrive::{Reflectible, Serializable};
//!
//! #[derive(Reflectible, Default, Debug, PartialEq)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! let point = Point { x: 3.0, y: 4.0 };
//! assert_eq!(point.to_text(), r#"{"x":3,"y":4}"#);
//!
//! let mut parsed = Point::default();
//! parsed.deserialize(r#"{"x":3,"y":4}"#).unwrap();
//! assert_eq!(parsed, point);
//! ```
//!
//! Registered types nest: a field whose type is itself registered
//! serializes as a nested object, with no extra wiring.
//!
//! ```
//! use scrive::{Reflectible, Serializable};
//!
//! #[derive(Reflectible, Default, Debug, PartialEq)]
//! struct Size {
//!     w: f64,
//!     h: f64,
//! }
//!
//! #[derive(Reflectible, Default, Debug, PartialEq)]
//! struct Frame {
//!     origin_x: f64,
//!     inner: Size,
//! }
//!
//! let frame = Frame {
//!     origin_x: 1.0,
//!     inner: Size { w: 5.0, h: 5.0 },
//! };
//! assert_eq!(frame.to_text(), r#"{"origin_x":1,"inner":{"w":5,"h":5}}"#);
//! ```
//!
//! ## Explicit field lists
//!
//! Types that cannot carry the derive register by hand with
//! [`Fields`] and [`registry::register`]; see `scrive-core` for the
//! worked example. Both paths meet the same first-wins rule: the first
//! registration for a type is permanent, later lists are silently
//! discarded.
//!
//! ## Parse failures
//!
//! Deserialization returns a typed [`Error`] carrying the byte offset
//! of the failure and, when the failure sits inside a field's value,
//! the field name.
//!
//! ```
//! use scrive::{Reflectible, Serializable};
//!
//! #[derive(Reflectible, Default, Debug)]
//! struct Reading {
//!     value: f64,
//! }
//!
//! let err = Reading::from_text(r#"{"value":}"#).unwrap_err();
//! assert_eq!(err.field(), Some("value"));
//! ```

pub use scrive_core::{engine, error, field, mode, policy, registry, serializable, source};

pub use scrive_core::{
    Error, Field, Fields, Json, KeyValue, Mode, OutputPolicy, Parse, ReadWrite, Reflectible,
    Registry, Render, Reversibility, Serializable, Source, WriteOnly,
};

#[cfg(feature = "derive")]
pub use scrive_derive::Reflectible;

#[cfg(feature = "matching")]
pub mod matching;
