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

//! The alternate flat policy: `name=value` pairs separated by single
//! spaces, no object delimiters.
//!
//! Values use the same literal forms as JSON, so strings stay quoted
//! and may contain spaces. The grammar has no nested-object form; this
//! policy is for flat types only. It exists to show that a policy swap
//! changes neither the registry nor the engine.

use crate::error::Error;
use crate::policy::literal;
use crate::policy::{OutputPolicy, Render};
use crate::registry::Registry;
use crate::source::Source;

/// Flat `name=value` grammar.
pub enum KeyValue {}

impl OutputPolicy for KeyValue {
    fn start_object(_out: &mut String) {}

    fn end_object(_out: &mut String) {}

    fn before_field(out: &mut String) {
        out.push(' ');
    }

    fn write_field<V>(out: &mut String, name: &str, value: &V)
    where
        V: Render<Self> + ?Sized,
    {
        out.push_str(name);
        out.push('=');
        value.render(out);
    }

    fn parse_object<T>(
        src: &mut Source<'_>,
        target: &mut T,
        registry: &Registry<T>,
    ) -> Result<(), Error> {
        loop {
            src.skip_ws();
            if src.at_end() {
                return Ok(());
            }
            let start = src.offset();
            let name = src.take_while(|ch| ch.is_alphanumeric() || ch == '_');
            if name.is_empty() {
                return match src.peek() {
                    Some(ch) => Err(Error::unexpected("a field name", ch, start)),
                    None => Err(Error::eof(start)),
                };
            }
            src.expect('=')?;
            match registry.field_named(name) {
                Some(field) => field.assign(target, src)?,
                None => skip_token(src).map_err(|err| Error::in_field(name.to_owned(), err))?,
            }
        }
    }
}

/// Consumes one unrecognized value: a quoted string, or everything up
/// to the next whitespace.
fn skip_token(src: &mut Source<'_>) -> Result<(), Error> {
    if src.peek() == Some('"') {
        literal::parse_string(src).map(drop)
    } else {
        src.take_while(|ch| !ch.is_ascii_whitespace());
        Ok(())
    }
}

literal::impl_literal_values!(KeyValue);
