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

use scrive::{Error, Reflectible, Serializable};

#[derive(Reflectible, Default, Debug, PartialEq)]
struct Pt {
    x: f64,
    y: f64,
}

#[test]
fn missing_value_fails_naming_the_field() {
    let err = Pt::from_text(r#"{"x":3,"y":}"#).unwrap_err();
    assert_eq!(err.field(), Some("y"));
    assert_eq!(err.offset(), 11);
    let rendered = err.to_string();
    assert!(rendered.contains("field `y`"), "got: {rendered}");
}

#[test]
fn failure_does_not_corrupt_the_target() {
    let mut target = Pt { x: 1.0, y: 2.0 };
    assert!(target.deserialize(r#"{"x":9,"y":oops}"#).is_err());
    // Fields before the failure may be updated; the failing one is not.
    assert_eq!(target.y, 2.0);
}

#[test]
fn unknown_fields_are_skipped_whole() {
    let parsed = Pt::from_text(
        r#"{ "ghost": {"deep": [1, "}", {"x": null}]}, "x": 3, "extra": "s", "y": 4 }"#,
    )
    .unwrap();
    assert_eq!(parsed, Pt { x: 3.0, y: 4.0 });
}

#[test]
fn missing_fields_keep_prior_values() {
    let mut target = Pt { x: 1.0, y: 2.0 };
    target.deserialize(r#"{"y":9}"#).unwrap();
    assert_eq!(target, Pt { x: 1.0, y: 9.0 });

    target.deserialize("{}").unwrap();
    assert_eq!(target, Pt { x: 1.0, y: 9.0 });
}

#[test]
fn whitespace_between_tokens_is_accepted() {
    let parsed = Pt::from_text(" {\n\t\"x\" : 3 ,\r\n \"y\" : 4 } ").unwrap();
    assert_eq!(parsed, Pt { x: 3.0, y: 4.0 });
}

#[test]
fn trailing_content_after_the_object_is_ignored() {
    let parsed = Pt::from_text(r#"{"x":3,"y":4}{"x":8}"#).unwrap();
    assert_eq!(parsed, Pt { x: 3.0, y: 4.0 });
}

#[test]
fn malformed_framing_is_rejected() {
    assert!(matches!(
        Pt::from_text("").unwrap_err(),
        Error::Eof { .. }
    ));
    assert!(Pt::from_text(r#"["x"]"#).is_err());
    assert!(Pt::from_text(r#"{"x":3 "y":4}"#).is_err());
    assert!(Pt::from_text(r#"{"x":3,"y":4"#).is_err());
    assert!(Pt::from_text(r#"{x:3}"#).is_err());
}

#[test]
fn malformed_numbers_are_typed_errors() {
    #[derive(Reflectible, Default, Debug)]
    struct Count {
        n: u16,
    }

    let err = Count::from_text(r#"{"n":70000}"#).unwrap_err();
    assert_eq!(err.field(), Some("n"));
    assert!(matches!(
        err,
        Error::Field { ref source, .. } if matches!(**source, Error::Number { .. })
    ));
}

#[test]
fn duplicate_input_keys_apply_in_order() {
    let parsed = Pt::from_text(r#"{"x":1,"x":2,"y":3}"#).unwrap();
    assert_eq!(parsed.x, 2.0);
}

#[test]
fn nested_parse_errors_name_the_outer_field() {
    #[derive(Reflectible, Default, Debug, PartialEq)]
    struct Wrap {
        tip: Pt,
    }

    let err = Wrap::from_text(r#"{"tip":{"x":1,"y":bad}}"#).unwrap_err();
    assert_eq!(err.field(), Some("tip"));
    // The inner failure keeps its own field name in the chain.
    assert!(err.to_string().contains("field `y`"));
}
