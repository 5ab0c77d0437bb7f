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

use scrive::{Reflectible, Serializable};

#[test]
fn derived_type_round_trips_field_by_field() {
    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Record {
        id: u64,
        name: String,
        score: f64,
        active: bool,
        delta: i32,
    }

    let record = Record {
        id: 42,
        name: "ada".into(),
        score: 0.5,
        active: true,
        delta: -7,
    };
    let text = record.to_text();
    assert_eq!(
        text,
        r#"{"id":42,"name":"ada","score":0.5,"active":true,"delta":-7}"#
    );
    assert_eq!(Record::from_text(&text).unwrap(), record);
}

#[test]
fn explicit_list_round_trips() {
    use scrive::{registry, Fields, Registry};

    #[derive(Default, Debug, PartialEq)]
    struct Pixel {
        r: u8,
        g: u8,
        b: u8,
    }

    impl Serializable for Pixel {
        fn registry() -> &'static Registry<Pixel> {
            registry::register(
                Fields::new()
                    .field("r", |p: &Pixel| &p.r, |p: &mut Pixel, v| p.r = v)
                    .field("g", |p: &Pixel| &p.g, |p: &mut Pixel, v| p.g = v)
                    .field("b", |p: &Pixel| &p.b, |p: &mut Pixel, v| p.b = v),
            )
        }
    }

    let pixel = Pixel { r: 1, g: 2, b: 255 };
    let text = pixel.to_text();
    assert_eq!(text, r#"{"r":1,"g":2,"b":255}"#);
    assert_eq!(Pixel::from_text(&text).unwrap(), pixel);
}

#[test]
fn key_order_matches_declaration_and_is_stable() {
    #[derive(Reflectible, Default)]
    struct Ordered {
        zulu: i32,
        alpha: i32,
        mike: i32,
    }

    let value = Ordered {
        zulu: 1,
        alpha: 2,
        mike: 3,
    };
    let first = value.to_text();
    assert_eq!(first, r#"{"zulu":1,"alpha":2,"mike":3}"#);
    assert_eq!(value.to_text(), first);
}

#[test]
fn nested_registered_field_serializes_as_nested_object() {
    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Inner {
        a: i32,
        b: i32,
    }

    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Outer {
        label: String,
        inner: Inner,
    }

    let outer = Outer {
        label: "boxed".into(),
        inner: Inner { a: 1, b: 2 },
    };
    let text = outer.to_text();
    assert_eq!(text, r#"{"label":"boxed","inner":{"a":1,"b":2}}"#);
    assert_eq!(Outer::from_text(&text).unwrap(), outer);
}

#[test]
fn rename_and_skip_attributes_shape_the_registry() {
    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Styled {
        #[scrive(rename = "displayName")]
        display_name: String,
        #[scrive(skip)]
        cached_len: usize,
        visible: bool,
    }

    let value = Styled {
        display_name: "n".into(),
        cached_len: 99,
        visible: true,
    };
    let text = value.to_text();
    assert_eq!(text, r#"{"displayName":"n","visible":true}"#);

    let parsed = Styled::from_text(&text).unwrap();
    assert_eq!(parsed.display_name, "n");
    // Skipped fields stay at their defaults.
    assert_eq!(parsed.cached_len, 0);
}

#[test]
fn string_values_round_trip_with_escaping() {
    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Note {
        body: String,
    }

    let note = Note {
        body: "line one\nline \"two\"\t\\end".into(),
    };
    let text = note.to_text();
    assert_eq!(Note::from_text(&text).unwrap(), note);
}
