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

//! Shared literal grammar: quoted strings, booleans, and decimal
//! numbers in their locale-independent JSON forms.
//!
//! Both shipped policies use these literal forms for values; only the
//! framing around them differs. The [`impl_literal_values!`] macro
//! stamps out the scalar [`Render`]/[`Parse`] impls for a policy.
//!
//! [`Render`]: crate::policy::Render
//! [`Parse`]: crate::policy::Parse

use std::fmt::Write;
use std::str::FromStr;

use crate::error::Error;
use crate::source::Source;

/// Writes `value` double-quoted with JSON string escaping.
pub(crate) fn render_string(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

/// Consumes a double-quoted string, decoding escapes. `\uXXXX` and
/// surrogate pairs are accepted on input even though output only ever
/// uses `\u00XX` for control characters.
pub(crate) fn parse_string(src: &mut Source<'_>) -> Result<String, Error> {
    src.expect('"')?;
    let mut value = String::new();
    loop {
        let offset = src.offset();
        match src.bump() {
            None => return Err(Error::eof(offset)),
            Some('"') => return Ok(value),
            Some('\\') => value.push(parse_escape(src, offset)?),
            Some(ch) => value.push(ch),
        }
    }
}

fn parse_escape(src: &mut Source<'_>, start: usize) -> Result<char, Error> {
    match src.bump() {
        None => Err(Error::eof(src.offset())),
        Some('"') => Ok('"'),
        Some('\\') => Ok('\\'),
        Some('/') => Ok('/'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('b') => Ok('\u{0008}'),
        Some('f') => Ok('\u{000C}'),
        Some('u') => {
            let high = hex4(src, start)?;
            if (0xD800..0xDC00).contains(&high) {
                // High surrogate: the low half must follow immediately.
                if !src.eat_str("\\u") {
                    return Err(Error::escape(start));
                }
                let low = hex4(src, start)?;
                if !(0xDC00..0xE000).contains(&low) {
                    return Err(Error::escape(start));
                }
                let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                char::from_u32(combined).ok_or_else(|| Error::escape(start))
            } else {
                char::from_u32(high).ok_or_else(|| Error::escape(start))
            }
        }
        Some(_) => Err(Error::escape(start)),
    }
}

fn hex4(src: &mut Source<'_>, start: usize) -> Result<u32, Error> {
    let mut value = 0u32;
    for _ in 0..4 {
        let offset = src.offset();
        let digit = src
            .bump()
            .ok_or_else(|| Error::eof(offset))?
            .to_digit(16)
            .ok_or_else(|| Error::escape(start))?;
        value = value * 16 + digit;
    }
    Ok(value)
}

/// Consumes `true` or `false`.
pub(crate) fn parse_bool(src: &mut Source<'_>) -> Result<bool, Error> {
    if src.eat_str("true") {
        return Ok(true);
    }
    if src.eat_str("false") {
        return Ok(false);
    }
    match src.peek() {
        Some(ch) => Err(Error::unexpected("`true` or `false`", ch, src.offset())),
        None => Err(Error::eof(src.offset())),
    }
}

/// Consumes an integer literal and parses it into the target type.
/// A minus sign in front of an unsigned target fails as a malformed
/// number, not a grammar error.
pub(crate) fn parse_int<N: FromStr>(src: &mut Source<'_>) -> Result<N, Error> {
    let start = src.offset();
    src.eat('-');
    if src.take_while(|ch| ch.is_ascii_digit()).is_empty() {
        return match src.peek() {
            Some(ch) => Err(Error::unexpected("a number", ch, src.offset())),
            None => Err(Error::eof(src.offset())),
        };
    }
    let literal = src.slice_from(start);
    literal.parse().map_err(|_| Error::number(literal, start))
}

/// Consumes a decimal literal — optional sign, integer part, optional
/// fraction, optional exponent — and returns the slice with its start
/// offset.
pub(crate) fn scan_float<'a>(src: &mut Source<'a>) -> Result<(&'a str, usize), Error> {
    let start = src.offset();
    src.eat('-');
    if src.take_while(|ch| ch.is_ascii_digit()).is_empty() {
        return match src.peek() {
            Some(ch) => Err(Error::unexpected("a number", ch, src.offset())),
            None => Err(Error::eof(src.offset())),
        };
    }
    if src.eat('.') && src.take_while(|ch| ch.is_ascii_digit()).is_empty() {
        return Err(Error::number(src.slice_from(start), start));
    }
    if src.eat('e') || src.eat('E') {
        if !src.eat('+') {
            src.eat('-');
        }
        if src.take_while(|ch| ch.is_ascii_digit()).is_empty() {
            return Err(Error::number(src.slice_from(start), start));
        }
    }
    Ok((src.slice_from(start), start))
}

/// Implements [`Render`] and [`Parse`] for the whole scalar value set
/// under one policy: booleans, the signed and unsigned integers, both
/// float widths, and `String`.
///
/// Floats render non-finite values as `null` so rendering stays total,
/// and parse `null` back to NaN.
///
/// [`Render`]: crate::policy::Render
/// [`Parse`]: crate::policy::Parse
macro_rules! impl_literal_values {
    ($policy:ty) => {
        $crate::policy::literal::impl_int_values!(
            $policy => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
        );
        $crate::policy::literal::impl_float_values!($policy => f32, f64);

        impl $crate::policy::Render<$policy> for bool {
            fn render(&self, out: &mut String) {
                out.push_str(if *self { "true" } else { "false" });
            }
        }

        impl $crate::policy::Parse<$policy> for bool {
            fn parse(
                src: &mut $crate::source::Source<'_>,
            ) -> ::std::result::Result<Self, $crate::error::Error> {
                $crate::policy::literal::parse_bool(src)
            }
        }

        impl $crate::policy::Render<$policy> for String {
            fn render(&self, out: &mut String) {
                $crate::policy::literal::render_string(out, self);
            }
        }

        impl $crate::policy::Parse<$policy> for String {
            fn parse(
                src: &mut $crate::source::Source<'_>,
            ) -> ::std::result::Result<Self, $crate::error::Error> {
                $crate::policy::literal::parse_string(src)
            }
        }
    };
}

macro_rules! impl_int_values {
    ($policy:ty => $($ty:ty),+ $(,)?) => {$(
        impl $crate::policy::Render<$policy> for $ty {
            fn render(&self, out: &mut String) {
                use ::std::fmt::Write;
                let _ = write!(out, "{self}");
            }
        }

        impl $crate::policy::Parse<$policy> for $ty {
            fn parse(
                src: &mut $crate::source::Source<'_>,
            ) -> ::std::result::Result<Self, $crate::error::Error> {
                $crate::policy::literal::parse_int(src)
            }
        }
    )+};
}

macro_rules! impl_float_values {
    ($policy:ty => $($ty:ty),+ $(,)?) => {$(
        impl $crate::policy::Render<$policy> for $ty {
            fn render(&self, out: &mut String) {
                if self.is_finite() {
                    use ::std::fmt::Write;
                    let _ = write!(out, "{self}");
                } else {
                    out.push_str("null");
                }
            }
        }

        impl $crate::policy::Parse<$policy> for $ty {
            fn parse(
                src: &mut $crate::source::Source<'_>,
            ) -> ::std::result::Result<Self, $crate::error::Error> {
                if src.eat_str("null") {
                    return Ok(<$ty>::NAN);
                }
                let (literal, start) = $crate::policy::literal::scan_float(src)?;
                literal
                    .parse()
                    .map_err(|_| $crate::error::Error::number(literal, start))
            }
        }
    )+};
}

pub(crate) use {impl_float_values, impl_int_values, impl_literal_values};
