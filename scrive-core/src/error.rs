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

//! Parse errors.
//!
//! Serialization never fails, so everything here describes a failure to
//! turn text back into a value. Every variant carries the byte offset of
//! the failure; a failure inside a field's value is additionally wrapped
//! in [`Error::Field`] so callers can see which registered field broke.
//!
//! Set the `SCRIVE_PANIC_ON_ERROR` environment variable at build time to
//! abort at the construction site of any error instead of returning it;
//! with `#[track_caller]` on the constructors the panic points at the
//! parsing code that produced the error.

use std::borrow::Cow;

use thiserror::Error;

pub(crate) const PANIC_ON_ERROR: bool = option_env!("SCRIVE_PANIC_ON_ERROR").is_some();

/// A recoverable deserialization failure.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input ended inside a value or inside the object framing.
    #[error("unexpected end of input at byte {offset}")]
    Eof { offset: usize },

    /// The next character does not fit the grammar at this position.
    #[error("expected {expected} at byte {offset}, found {found:?}")]
    Unexpected {
        expected: Cow<'static, str>,
        found: char,
        offset: usize,
    },

    /// A numeric literal that does not scan, or does not fit the target type.
    #[error("malformed number {literal:?} at byte {offset}")]
    Number { literal: String, offset: usize },

    /// A string escape sequence the grammar does not define.
    #[error("invalid escape sequence at byte {offset}")]
    Escape { offset: usize },

    /// Failure while parsing the value of a named field.
    #[error("field `{field}`: {source}")]
    Field {
        field: Cow<'static, str>,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn eof(offset: usize) -> Self {
        let err = Error::Eof { offset };
        if PANIC_ON_ERROR {
            panic!("{}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unexpected(expected: impl Into<Cow<'static, str>>, found: char, offset: usize) -> Self {
        let err = Error::Unexpected {
            expected: expected.into(),
            found,
            offset,
        };
        if PANIC_ON_ERROR {
            panic!("{}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn number(literal: impl Into<String>, offset: usize) -> Self {
        let err = Error::Number {
            literal: literal.into(),
            offset,
        };
        if PANIC_ON_ERROR {
            panic!("{}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn escape(offset: usize) -> Self {
        let err = Error::Escape { offset };
        if PANIC_ON_ERROR {
            panic!("{}", err);
        }
        err
    }

    /// Wraps `source` with the name of the field whose value was being
    /// parsed. The inner error keeps the precise offset.
    #[inline(always)]
    #[cold]
    pub fn in_field(field: impl Into<Cow<'static, str>>, source: Error) -> Self {
        Error::Field {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Byte offset where parsing failed, looking through field wrappers.
    pub fn offset(&self) -> usize {
        match self {
            Error::Eof { offset }
            | Error::Unexpected { offset, .. }
            | Error::Number { offset, .. }
            | Error::Escape { offset } => *offset,
            Error::Field { source, .. } => source.offset(),
        }
    }

    /// Name of the field whose value failed to parse, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}
