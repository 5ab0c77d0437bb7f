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

//! The input cursor all parsing consumes through.

use crate::error::Error;

/// Cursor over borrowed input text.
///
/// Policies and value parsers advance a shared `Source`, so nested
/// objects resume at the right position and every error can report an
/// exact byte offset. The cursor never looks past the end and never
/// splits a UTF-8 sequence.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Source<'a> {
    pub fn new(input: &'a str) -> Source<'a> {
        Source { input, offset: 0 }
    }

    /// Byte offset of the cursor from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.offset += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the remainder starts with it.
    pub fn eat_str(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.offset += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` or reports what was found instead.
    pub fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.offset += ch.len_utf8();
                Ok(())
            }
            Some(ch) => Err(Error::unexpected(format!("`{expected}`"), ch, self.offset)),
            None => Err(Error::eof(self.offset)),
        }
    }

    /// Skips ASCII whitespace.
    pub fn skip_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.offset += 1;
            } else {
                break;
            }
        }
    }

    /// Consumes the longest prefix whose characters satisfy `pred` and
    /// returns it.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if pred(ch) {
                self.offset += ch.len_utf8();
            } else {
                break;
            }
        }
        self.slice_from(start)
    }

    /// Input between an earlier offset and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }
}
