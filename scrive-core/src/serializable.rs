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

//! The opt-in traits.
//!
//! [`Serializable`] is what a participating type exposes: a registry
//! hook plus the provided conveniences layered on the engine.
//! [`Reflectible`] is the compile-time capability behind the
//! zero-argument opt-in; `#[derive(Reflectible)]` implements it, and
//! the trait bound on [`registry::register_reflectible`] turns a
//! missing opt-in into a type error instead of a runtime failure.
//!
//! [`registry::register_reflectible`]: crate::registry::register_reflectible

use crate::engine;
use crate::error::Error;
use crate::field::Fields;
use crate::mode::Reversibility;
use crate::policy::OutputPolicy;
use crate::registry::Registry;

/// A type associated with a field registry.
///
/// `registry()` is the only required method and is expected to perform
/// the type's lazy one-time registration: the first call builds and
/// installs the registry, later calls pay a lookup only.
pub trait Serializable: Sized + 'static {
    /// Handle to this type's registry, registering on first use.
    fn registry() -> &'static Registry<Self>;

    /// Appends the serialized form of `self` to `out`. Never fails.
    fn serialize(&self, out: &mut String) {
        engine::serialize_with(Self::registry(), self, out);
    }

    /// Serialized form of `self` as a fresh string.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.serialize(&mut out);
        out
    }

    /// Assigns the fields found in `input` in place. A guaranteed no-op
    /// success when the type registered write-only.
    fn deserialize(&mut self, input: &str) -> Result<(), Error> {
        engine::deserialize_with(Self::registry(), self, input)
    }

    /// Parses `input` into a freshly defaulted value.
    fn from_text(input: &str) -> Result<Self, Error>
    where
        Self: Default,
    {
        let mut value = Self::default();
        value.deserialize(input)?;
        Ok(value)
    }
}

/// Compile-time capability: the type exposes its own ordered field
/// list, policy, and reversibility, enabling registration with no
/// arguments.
pub trait Reflectible: Sized + 'static {
    /// Grammar the type serializes under.
    type Policy: OutputPolicy;

    /// Reversibility marker, [`ReadWrite`] or [`WriteOnly`].
    ///
    /// [`ReadWrite`]: crate::mode::ReadWrite
    /// [`WriteOnly`]: crate::mode::WriteOnly
    type Mode: Reversibility;

    /// The type's own descriptor list, in declaration order.
    fn reflect_fields() -> Fields<Self, Self::Policy, Self::Mode>;
}
