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

//! Derive macro for the scrive field registry.
//!
//! `#[derive(Reflectible)]` turns a struct with named fields into a
//! registered type: it implements the `Reflectible` capability (the
//! field list in declaration order), the `Serializable` opt-in, and the
//! `Render`/`Parse` codecs that let the type nest inside other
//! registered types.
//!
//! ```ignore
//! use scrive::{Reflectible, Serializable};
//!
//! #[derive(Reflectible, Default, Debug, PartialEq)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! assert_eq!(Point { x: 3.0, y: 4.0 }.to_text(), r#"{"x":3,"y":4}"#);
//! ```
//!
//! # Attributes
//!
//! Container level, under `#[scrive(...)]`:
//! - `policy = Path` — serialize under the named output policy instead
//!   of the default JSON one.
//! - `write_only` — register render-only descriptors; `deserialize`
//!   becomes a guaranteed no-op and no `Parse` impl is emitted.
//!
//! Field level:
//! - `rename = "name"` — register the field under a different public
//!   name.
//! - `skip` — leave the field out of the registry entirely.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod reflectible;

#[proc_macro_derive(Reflectible, attributes(scrive))]
pub fn derive_reflectible(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflectible::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
