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

//! Output policies: the pluggable textual grammar.
//!
//! A policy owns the concrete syntax — object framing, field separators,
//! and the literal forms of values — while the registry and engine stay
//! grammar-agnostic. Policies are stateless marker types; every
//! operation is an associated function, so a registry can capture the
//! framing as plain `fn` pointers and erase the policy's type.
//!
//! [`Json`] is the default. [`KeyValue`] is the alternate flat grammar
//! demonstrating that a policy swap touches neither the registry nor
//! the engine.

pub(crate) mod literal;

mod json;
mod key_value;

pub use json::Json;
pub use key_value::KeyValue;

use crate::error::Error;
use crate::registry::Registry;
use crate::source::Source;

/// Strategy defining one textual grammar.
///
/// Implemented on uninhabited marker types. The five operations are the
/// whole contract: three framing writers, one field writer, and one
/// whole-object parser that drives assignment through a registry.
pub trait OutputPolicy: 'static {
    /// Opens the serialized object.
    fn start_object(out: &mut String);

    /// Closes the serialized object.
    fn end_object(out: &mut String);

    /// Separator written between consecutive fields, not before the
    /// first one.
    fn before_field(out: &mut String);

    /// Writes one named field, name and value in this grammar's form.
    fn write_field<V>(out: &mut String, name: &str, value: &V)
    where
        Self: Sized,
        V: Render<Self> + ?Sized;

    /// Consumes one whole object from the cursor, assigning each
    /// recognized field through its descriptor in `registry`.
    ///
    /// Unknown names in the input are skipped; registered names absent
    /// from the input leave the target's current value in place.
    fn parse_object<T>(
        src: &mut Source<'_>,
        target: &mut T,
        registry: &Registry<T>,
    ) -> Result<(), Error>
    where
        Self: Sized;
}

/// A value that can be written in policy `P`'s grammar.
///
/// Implemented for the scalar value set by each policy, and for
/// registered types by recursing into their own serialization (the
/// derive emits that impl; `scrive-geom` writes it by hand).
pub trait Render<P: OutputPolicy> {
    fn render(&self, out: &mut String);
}

/// A value that can be read back from policy `P`'s grammar.
pub trait Parse<P: OutputPolicy>: Sized {
    fn parse(src: &mut Source<'_>) -> Result<Self, Error>;
}
