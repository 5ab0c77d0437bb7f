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

//! 2-D and 3-D points.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::sync::OnceLock;

use scrive_core::engine;
use scrive_core::error::Error;
use scrive_core::policy::{Json, Parse, Render};
use scrive_core::registry;
use scrive_core::source::Source;
use scrive_core::{Fields, Registry, Serializable};

/// A 2-D point, serialized as `{"x":...,"y":...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Serializable for Point {
    fn registry() -> &'static Registry<Point> {
        static HANDLE: OnceLock<&'static Registry<Point>> = OnceLock::new();
        HANDLE.get_or_init(|| {
            registry::register(
                Fields::new()
                    .field("x", |p: &Point| &p.x, |p: &mut Point, v| p.x = v)
                    .field("y", |p: &Point| &p.y, |p: &mut Point, v| p.y = v),
            )
        })
    }
}

impl Render<Json> for Point {
    fn render(&self, out: &mut String) {
        engine::serialize_with(Point::registry(), self, out);
    }
}

impl Parse<Json> for Point {
    fn parse(src: &mut Source<'_>) -> Result<Point, Error> {
        let mut point = Point::default();
        engine::parse_with(Point::registry(), &mut point, src)?;
        Ok(point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A 3-D point, serialized as `{"x":...,"y":...,"z":...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl Serializable for Point3 {
    fn registry() -> &'static Registry<Point3> {
        static HANDLE: OnceLock<&'static Registry<Point3>> = OnceLock::new();
        HANDLE.get_or_init(|| {
            registry::register(
                Fields::new()
                    .field("x", |p: &Point3| &p.x, |p: &mut Point3, v| p.x = v)
                    .field("y", |p: &Point3| &p.y, |p: &mut Point3, v| p.y = v)
                    .field("z", |p: &Point3| &p.z, |p: &mut Point3, v| p.z = v),
            )
        })
    }
}

impl Render<Json> for Point3 {
    fn render(&self, out: &mut String) {
        engine::serialize_with(Point3::registry(), self, out);
    }
}

impl Parse<Json> for Point3 {
    fn parse(src: &mut Source<'_>) -> Result<Point3, Error> {
        let mut point = Point3::default();
        engine::parse_with(Point3::registry(), &mut point, src)?;
        Ok(point)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Point3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}
