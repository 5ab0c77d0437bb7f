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

//! Axis-aligned rectangles, 2-D and 3-D.
//!
//! A rectangle is a corner plus an extent. Containment is half-open:
//! the near borders belong to the rectangle, the far borders do not.

use std::fmt;
use std::sync::OnceLock;

use scrive_core::engine;
use scrive_core::error::Error;
use scrive_core::policy::{Json, Parse, Render};
use scrive_core::registry;
use scrive_core::source::Source;
use scrive_core::{Fields, Registry, Serializable};

use crate::point::{Point, Point3};

/// An axis-aligned 2-D rectangle, serialized as
/// `{"topLeft":{...},"size":{...}}` with the points nested inline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top_left: Point,
    pub size: Point,
}

impl Rect {
    pub fn new(top_left: Point, size: Point) -> Rect {
        Rect { top_left, size }
    }

    /// True when the rectangles overlap. With `inclusive_borders`,
    /// touching edges count as an intersection.
    pub fn intersects(&self, other: &Rect, inclusive_borders: bool) -> bool {
        if inclusive_borders {
            !(self.top_left.x > other.top_left.x + other.size.x
                || self.top_left.x + self.size.x < other.top_left.x
                || self.top_left.y > other.top_left.y + other.size.y
                || self.top_left.y + self.size.y < other.top_left.y)
        } else {
            !(self.top_left.x >= other.top_left.x + other.size.x
                || self.top_left.x + self.size.x < other.top_left.x
                || self.top_left.y >= other.top_left.y + other.size.y
                || self.top_left.y + self.size.y < other.top_left.y)
        }
    }

    /// True when `point` lies inside, near borders included, far
    /// borders excluded.
    pub fn contains(&self, point: &Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.x + self.size.x > point.x
            && self.top_left.y <= point.y
            && self.top_left.y + self.size.y > point.y
    }
}

impl Serializable for Rect {
    fn registry() -> &'static Registry<Rect> {
        static HANDLE: OnceLock<&'static Registry<Rect>> = OnceLock::new();
        HANDLE.get_or_init(|| {
            registry::register(
                Fields::new()
                    .field(
                        "topLeft",
                        |r: &Rect| &r.top_left,
                        |r: &mut Rect, v| r.top_left = v,
                    )
                    .field("size", |r: &Rect| &r.size, |r: &mut Rect, v| r.size = v),
            )
        })
    }
}

impl Render<Json> for Rect {
    fn render(&self, out: &mut String) {
        engine::serialize_with(Rect::registry(), self, out);
    }
}

impl Parse<Json> for Rect {
    fn parse(src: &mut Source<'_>) -> Result<Rect, Error> {
        let mut rect = Rect::default();
        engine::parse_with(Rect::registry(), &mut rect, src)?;
        Ok(rect)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// An axis-aligned 3-D box with the same serialized shape as [`Rect`],
/// holding [`Point3`] corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect3 {
    pub top_left: Point3,
    pub size: Point3,
}

impl Rect3 {
    pub fn new(top_left: Point3, size: Point3) -> Rect3 {
        Rect3 { top_left, size }
    }

    /// True when the boxes overlap with positive volume; touching
    /// faces do not count.
    pub fn intersects(&self, other: &Rect3) -> bool {
        !(self.top_left.x >= other.top_left.x + other.size.x
            || self.top_left.x + self.size.x <= other.top_left.x
            || self.top_left.y >= other.top_left.y + other.size.y
            || self.top_left.y + self.size.y <= other.top_left.y
            || self.top_left.z >= other.top_left.z + other.size.z
            || self.top_left.z + self.size.z <= other.top_left.z)
    }

    /// True when `point` lies inside, near faces included, far faces
    /// excluded.
    pub fn contains(&self, point: &Point3) -> bool {
        self.top_left.x <= point.x
            && self.top_left.x + self.size.x > point.x
            && self.top_left.y <= point.y
            && self.top_left.y + self.size.y > point.y
            && self.top_left.z <= point.z
            && self.top_left.z + self.size.z > point.z
    }
}

impl Serializable for Rect3 {
    fn registry() -> &'static Registry<Rect3> {
        static HANDLE: OnceLock<&'static Registry<Rect3>> = OnceLock::new();
        HANDLE.get_or_init(|| {
            registry::register(
                Fields::new()
                    .field(
                        "topLeft",
                        |r: &Rect3| &r.top_left,
                        |r: &mut Rect3, v| r.top_left = v,
                    )
                    .field("size", |r: &Rect3| &r.size, |r: &mut Rect3, v| r.size = v),
            )
        })
    }
}

impl Render<Json> for Rect3 {
    fn render(&self, out: &mut String) {
        engine::serialize_with(Rect3::registry(), self, out);
    }
}

impl Parse<Json> for Rect3 {
    fn parse(src: &mut Source<'_>) -> Result<Rect3, Error> {
        let mut rect = Rect3::default();
        engine::parse_with(Rect3::registry(), &mut rect, src)?;
        Ok(rect)
    }
}

impl fmt::Display for Rect3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
