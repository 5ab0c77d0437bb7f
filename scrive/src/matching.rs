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

//! String-matching sugar over the `regex` crate.
//!
//! Unrelated to the serialization mechanism; shipped alongside it as a
//! convenience. Both operations anchor to the whole string, so a
//! pattern matches only when it covers the input end to end.

use regex::Regex;

/// Compiles `source` into a [`Regex`].
pub fn pattern(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(source)
}

/// Whole-string matching on `str`.
pub trait MatchExt {
    /// True when `pattern` matches this entire string.
    fn matches_pattern(&self, pattern: &Regex) -> bool;

    /// Capture groups of a whole-string match, group 0 first.
    /// Unmatched optional groups come back empty. `None` when the
    /// pattern does not cover the entire string.
    fn capture_groups(&self, pattern: &Regex) -> Option<Vec<String>>;
}

impl MatchExt for str {
    fn matches_pattern(&self, pattern: &Regex) -> bool {
        pattern
            .find(self)
            .is_some_and(|found| found.start() == 0 && found.end() == self.len())
    }

    fn capture_groups(&self, pattern: &Regex) -> Option<Vec<String>> {
        let captures = pattern.captures(self)?;
        let whole = captures.get(0)?;
        if whole.start() != 0 || whole.end() != self.len() {
            return None;
        }
        Some(
            captures
                .iter()
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_owned()))
                .collect(),
        )
    }
}
