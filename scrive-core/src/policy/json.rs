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

//! The default JSON-like policy.
//!
//! Output is a single object, `{"name":value,...}` with no whitespace,
//! key order matching registration order. Input accepts whitespace
//! between tokens, skips unknown fields (any JSON value, including
//! arrays and nested objects), and leaves registered fields missing
//! from the input at their current values.

use crate::error::Error;
use crate::policy::literal;
use crate::policy::{OutputPolicy, Render};
use crate::registry::Registry;
use crate::source::Source;

/// The default policy: a JSON object grammar.
pub enum Json {}

impl OutputPolicy for Json {
    fn start_object(out: &mut String) {
        out.push('{');
    }

    fn end_object(out: &mut String) {
        out.push('}');
    }

    fn before_field(out: &mut String) {
        out.push(',');
    }

    fn write_field<V>(out: &mut String, name: &str, value: &V)
    where
        V: Render<Self> + ?Sized,
    {
        literal::render_string(out, name);
        out.push(':');
        value.render(out);
    }

    fn parse_object<T>(
        src: &mut Source<'_>,
        target: &mut T,
        registry: &Registry<T>,
    ) -> Result<(), Error> {
        src.skip_ws();
        src.expect('{')?;
        src.skip_ws();
        if src.eat('}') {
            return Ok(());
        }
        loop {
            let name = literal::parse_string(src)?;
            src.skip_ws();
            src.expect(':')?;
            src.skip_ws();
            match registry.field_named(&name) {
                Some(field) => field.assign(target, src)?,
                None => skip_value(src).map_err(|err| Error::in_field(name, err))?,
            }
            src.skip_ws();
            if src.eat(',') {
                src.skip_ws();
            } else {
                src.expect('}')?;
                return Ok(());
            }
        }
    }
}

/// Consumes one JSON value of any shape without interpreting it.
fn skip_value(src: &mut Source<'_>) -> Result<(), Error> {
    src.skip_ws();
    match src.peek() {
        None => Err(Error::eof(src.offset())),
        Some('"') => literal::parse_string(src).map(drop),
        Some('{') => skip_delimited(src, '}'),
        Some('[') => skip_delimited(src, ']'),
        Some('t') | Some('f') => literal::parse_bool(src).map(drop),
        Some('n') => {
            if src.eat_str("null") {
                Ok(())
            } else {
                Err(Error::unexpected("`null`", 'n', src.offset()))
            }
        }
        Some('-') | Some('0'..='9') => literal::scan_float(src).map(drop),
        Some(ch) => Err(Error::unexpected("a value", ch, src.offset())),
    }
}

fn skip_delimited(src: &mut Source<'_>, close: char) -> Result<(), Error> {
    src.bump();
    loop {
        src.skip_ws();
        match src.peek() {
            None => return Err(Error::eof(src.offset())),
            Some(ch) if ch == close => {
                src.bump();
                return Ok(());
            }
            Some(',') | Some(':') => {
                src.bump();
            }
            Some(_) => skip_value(src)?,
        }
    }
}

literal::impl_literal_values!(Json);
