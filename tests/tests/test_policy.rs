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

//! Policy substitution: the same registry and engine drive a different
//! grammar when a type picks the flat key=value policy.

use scrive::{Reflectible, Serializable};

#[derive(Reflectible, Default, Debug, PartialEq)]
#[scrive(policy = scrive::KeyValue)]
struct Window {
    width: u32,
    height: u32,
    title: String,
}

#[test]
fn key_value_grammar_is_flat() {
    let window = Window {
        width: 640,
        height: 480,
        title: "main".into(),
    };
    assert_eq!(window.to_text(), r#"width=640 height=480 title="main""#);
}

#[test]
fn key_value_round_trips() {
    let window = Window {
        width: 1,
        height: 2,
        title: "two words".into(),
    };
    let text = window.to_text();
    assert_eq!(text, r#"width=1 height=2 title="two words""#);
    assert_eq!(Window::from_text(&text).unwrap(), window);
}

#[test]
fn key_value_is_permissive_like_the_default() {
    let mut window = Window {
        width: 9,
        height: 9,
        title: "kept".into(),
    };
    window
        .deserialize(r#"height=30 ghost=77 other="spaced value""#)
        .unwrap();
    assert_eq!(window.width, 9);
    assert_eq!(window.height, 30);
    assert_eq!(window.title, "kept");
}

#[test]
fn key_value_rejects_missing_separator() {
    assert!(Window::from_text("width 640").is_err());
}

#[test]
fn explicit_lists_take_policies_too() {
    use scrive::{registry, Fields, KeyValue, ReadWrite, Registry};

    #[derive(Default, Debug, PartialEq)]
    struct Cursor {
        row: u16,
        col: u16,
    }

    impl Serializable for Cursor {
        fn registry() -> &'static Registry<Cursor> {
            registry::register(
                Fields::<Cursor, KeyValue, ReadWrite>::with_policy()
                    .field("row", |c: &Cursor| &c.row, |c: &mut Cursor, v| c.row = v)
                    .field("col", |c: &Cursor| &c.col, |c: &mut Cursor, v| c.col = v),
            )
        }
    }

    let cursor = Cursor { row: 3, col: 14 };
    assert_eq!(cursor.to_text(), "row=3 col=14");
    assert_eq!(Cursor::from_text("row=3 col=14").unwrap(), cursor);
}
