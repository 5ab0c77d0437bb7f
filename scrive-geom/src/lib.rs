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

//! Geometry value types registering their fields with scrive.
//!
//! Points and axis-aligned rectangles in two and three dimensions.
//! They opt in through the explicit field-list form, so this crate
//! doubles as the worked example of registering without the derive:
//! each type's `registry()` hands an ordered accessor list to
//! `scrive_core::registry::register` on first use.
//!
//! Rectangles serialize their corner under `topLeft` and their extent
//! under `size`, nesting the point objects inline:
//! `{"topLeft":{"x":0,"y":0},"size":{"x":5,"y":5}}`.

mod point;
mod rect;

pub use point::{Point, Point3};
pub use rect::{Rect, Rect3};
