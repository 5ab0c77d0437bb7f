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

use scrive::Serializable;
use scrive_geom::{Point, Point3, Rect, Rect3};

#[test]
fn point_matches_the_reference_text() {
    let point = Point::new(3.0, 4.0);
    assert_eq!(point.to_text(), r#"{"x":3,"y":4}"#);
    assert_eq!(Point::from_text(r#"{"x":3,"y":4}"#).unwrap(), point);
}

#[test]
fn rect_nests_its_points() {
    let rect = Rect::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    let text = rect.to_text();
    assert_eq!(text, r#"{"topLeft":{"x":0,"y":0},"size":{"x":5,"y":5}}"#);
    assert_eq!(Rect::from_text(&text).unwrap(), rect);
}

#[test]
fn rect3_round_trips_with_three_axes() {
    let rect = Rect3::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0));
    let text = rect.to_text();
    assert_eq!(
        text,
        r#"{"topLeft":{"x":1,"y":2,"z":3},"size":{"x":4,"y":5,"z":6}}"#
    );
    assert_eq!(Rect3::from_text(&text).unwrap(), rect);
}

#[test]
fn nested_objects_parse_with_interleaved_unknowns() {
    let parsed = Rect::from_text(
        r#"{"area": 25, "topLeft": {"x": 0, "note": "corner", "y": 0}, "size": {"x": 5, "y": 5}}"#,
    )
    .unwrap();
    assert_eq!(parsed, Rect::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
}

#[test]
fn partial_rect_payload_updates_only_named_parts() {
    let mut rect = Rect::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
    rect.deserialize(r#"{"size":{"x":9,"y":9}}"#).unwrap();
    assert_eq!(rect.top_left, Point::new(1.0, 1.0));
    assert_eq!(rect.size, Point::new(9.0, 9.0));
}

#[test]
fn point_operators_and_distance() {
    let mut p = Point::new(1.0, 2.0);
    p += Point::new(2.0, 2.0);
    assert_eq!(p, Point::new(3.0, 4.0));
    assert_eq!(p - Point::new(3.0, 4.0), Point::default());
    assert_eq!(-p, Point::new(-3.0, -4.0));
    assert_eq!(Point::default().distance_to(&p), 5.0);

    let q = Point3::new(1.0, 1.0, 1.0) + Point3::new(1.0, 2.0, 5.0);
    assert_eq!(q, Point3::new(2.0, 3.0, 6.0));
    assert_eq!(Point3::default().distance_to(&q), 7.0);
}

#[test]
fn intersection_honors_the_borders_flag() {
    let base = Rect::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    let touching = Rect::new(Point::new(5.0, 0.0), Point::new(5.0, 5.0));
    let overlapping = Rect::new(Point::new(4.0, 4.0), Point::new(5.0, 5.0));
    let apart = Rect::new(Point::new(20.0, 0.0), Point::new(1.0, 1.0));

    assert!(!base.intersects(&touching, false));
    assert!(base.intersects(&touching, true));
    assert!(base.intersects(&overlapping, false));
    assert!(!base.intersects(&apart, true));
}

#[test]
fn containment_includes_near_borders_only() {
    let rect = Rect::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    assert!(rect.contains(&Point::new(0.0, 0.0)));
    assert!(!rect.contains(&Point::new(5.0, 5.0)));

    let cube = Rect3::new(Point3::default(), Point3::new(2.0, 2.0, 2.0));
    assert!(cube.contains(&Point3::new(0.0, 1.9, 0.5)));
    assert!(!cube.contains(&Point3::new(0.0, 2.0, 0.5)));
}

#[test]
fn display_shows_serialized_form() {
    let rect = Rect::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    assert_eq!(
        rect.to_string(),
        r#"{"topLeft":{"x":0,"y":0},"size":{"x":5,"y":5}}"#
    );
}
