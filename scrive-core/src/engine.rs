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

//! The traversal that moves values across a registry.
//!
//! Serialization walks the descriptors in registration order inside the
//! policy's object framing and never fails. Deserialization hands the
//! whole input to the policy captured at registration; for a write-only
//! registry it succeeds without reading anything. Both directions are
//! stateless and re-entrant.

use crate::error::Error;
use crate::registry::{self, Registry};
use crate::source::Source;

/// Appends the serialized form of `value` to `out`.
///
/// Panics if `T` was never registered, like [`registry::get`].
pub fn serialize<T: 'static>(value: &T, out: &mut String) {
    serialize_with(registry::get::<T>(), value, out);
}

/// Serialized form of `value` as a fresh string.
pub fn to_text<T: 'static>(value: &T) -> String {
    let mut out = String::new();
    serialize(value, &mut out);
    out
}

/// Parses `input` and assigns the recognized fields of `target` in
/// place. Fields absent from the input keep their current values.
///
/// Content after the object's closing delimiter is left unexamined.
pub fn deserialize<T: 'static>(target: &mut T, input: &str) -> Result<(), Error> {
    deserialize_with(registry::get::<T>(), target, input)
}

/// Parses `input` into a freshly defaulted value.
pub fn from_text<T: Default + 'static>(input: &str) -> Result<T, Error> {
    let mut value = T::default();
    deserialize(&mut value, input)?;
    Ok(value)
}

/// [`serialize`] against an explicit registry handle. Nested renders go
/// through here so a field's value serializes under its own registry.
pub fn serialize_with<T>(registry: &Registry<T>, value: &T, out: &mut String) {
    registry.start_object(out);
    for (index, field) in registry.fields().iter().enumerate() {
        if index > 0 {
            registry.before_field(out);
        }
        field.render(value, out);
    }
    registry.end_object(out);
}

/// [`deserialize`] against an explicit registry handle.
pub fn deserialize_with<T>(registry: &Registry<T>, target: &mut T, input: &str) -> Result<(), Error> {
    let mut src = Source::new(input);
    parse_with(registry, target, &mut src)
}

/// Consumes one object at the cursor. Nested parses resume here mid
/// input, so the cursor is shared rather than rebuilt.
pub fn parse_with<T>(registry: &Registry<T>, target: &mut T, src: &mut Source<'_>) -> Result<(), Error> {
    registry.parse_object(src, target)
}
