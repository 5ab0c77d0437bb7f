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

//! Reversibility: whether a registry supports deserialization at all.

/// Runtime reversibility of a registry, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    // Both directions: serialize and deserialize.
    ReadWrite,
    // Serialize only; deserializing is a no-op that leaves the target untouched.
    WriteOnly,
}

/// Type-state marker selecting a [`Mode`] when a field list is built.
pub trait Reversibility {
    const MODE: Mode;
}

/// Marker for registries that parse as well as render.
pub enum ReadWrite {}

/// Marker for render-only registries.
pub enum WriteOnly {}

impl Reversibility for ReadWrite {
    const MODE: Mode = Mode::ReadWrite;
}

impl Reversibility for WriteOnly {
    const MODE: Mode = Mode::WriteOnly;
}
