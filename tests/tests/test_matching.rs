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

use scrive::matching::{pattern, MatchExt};

#[test]
fn matching_anchors_to_the_whole_string() {
    let hex = pattern("[0-9a-f]+").unwrap();
    assert!("deadbeef".matches_pattern(&hex));
    assert!(!"deadbeefX".matches_pattern(&hex));
    assert!(!"Xdeadbeef".matches_pattern(&hex));
    assert!(!"".matches_pattern(&hex));
}

#[test]
fn capture_groups_come_back_in_order() {
    let kv = pattern("([a-z]+)=([0-9]+)").unwrap();
    let groups = "width=640".capture_groups(&kv).unwrap();
    assert_eq!(groups, vec!["width=640", "width", "640"]);
}

#[test]
fn partial_matches_capture_nothing() {
    let kv = pattern("([a-z]+)=([0-9]+)").unwrap();
    assert!("width=640;".capture_groups(&kv).is_none());
    assert!("???".capture_groups(&kv).is_none());
}

#[test]
fn invalid_patterns_surface_the_regex_error() {
    assert!(pattern("(unclosed").is_err());
}
