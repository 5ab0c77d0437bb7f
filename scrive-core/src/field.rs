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

//! Attribute descriptors and the ordered field-list builder.
//!
//! A descriptor pairs a public field name with the accessors that move
//! the field's value across a policy's grammar. The value type and the
//! policy are fixed when the descriptor is built and then erased, so a
//! registry holds a homogeneous slice regardless of what its fields
//! contain.

use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::mode::{ReadWrite, WriteOnly};
use crate::policy::{Json, OutputPolicy, Parse, Render};
use crate::source::Source;

type RenderFn<T> = Box<dyn Fn(&T, &mut String) + Send + Sync>;
type AssignFn<T> = Box<dyn Fn(&mut T, &mut Source<'_>) -> Result<(), Error> + Send + Sync>;

/// One attribute descriptor for owner type `T`: the registered public
/// name plus type-erased render/assign closures.
pub struct Field<T> {
    name: &'static str,
    render: RenderFn<T>,
    assign: Option<AssignFn<T>>,
}

impl<T: 'static> Field<T> {
    fn readwrite<P, V>(name: &'static str, get: fn(&T) -> &V, set: fn(&mut T, V)) -> Field<T>
    where
        P: OutputPolicy,
        V: Render<P> + Parse<P> + 'static,
    {
        Field {
            name,
            render: Box::new(move |value: &T, out: &mut String| {
                P::write_field(out, name, get(value));
            }),
            assign: Some(Box::new(move |target: &mut T, src: &mut Source<'_>| {
                let parsed = V::parse(src).map_err(|err| Error::in_field(name, err))?;
                set(target, parsed);
                Ok(())
            })),
        }
    }

    fn render_only<P, V>(name: &'static str, get: fn(&T) -> &V) -> Field<T>
    where
        P: OutputPolicy,
        V: Render<P> + 'static,
    {
        Field {
            name,
            render: Box::new(move |value: &T, out: &mut String| {
                P::write_field(out, name, get(value));
            }),
            assign: None,
        }
    }
}

impl<T> Field<T> {
    /// Registered public name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Renders the full name/value pair for `value` through the policy
    /// the descriptor was built with.
    pub fn render(&self, value: &T, out: &mut String) {
        (self.render)(value, out);
    }

    /// Parses one value at the cursor and stores it in `target`.
    ///
    /// Failures inside the value come back wrapped with this field's
    /// name. Render-only descriptors have no setter and succeed without
    /// consuming input; write-only registries never parse, so policies
    /// only ever reach them through a read-write registry.
    pub fn assign(&self, target: &mut T, src: &mut Source<'_>) -> Result<(), Error> {
        match &self.assign {
            Some(assign) => assign(target, src),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("settable", &self.assign.is_some())
            .finish()
    }
}

/// Ordered field-list builder: the explicit opt-in form.
///
/// `P` selects the output policy and `M` the reversibility; both are
/// fixed for every descriptor in the list and sealed into the registry
/// at registration. Declaration order is traversal order, permanently.
pub struct Fields<T, P = Json, M = ReadWrite> {
    fields: Vec<Field<T>>,
    _strategy: PhantomData<fn(P, M)>,
}

impl<T: 'static> Fields<T> {
    /// Starts a read-write list under the default JSON policy.
    pub fn new() -> Fields<T, Json, ReadWrite> {
        Fields {
            fields: Vec::new(),
            _strategy: PhantomData,
        }
    }

    /// Starts a write-only list under the default JSON policy.
    pub fn write_only() -> Fields<T, Json, WriteOnly> {
        Fields {
            fields: Vec::new(),
            _strategy: PhantomData,
        }
    }
}

impl<T: 'static, P: OutputPolicy> Fields<T, P, ReadWrite> {
    /// Starts a read-write list under policy `P`.
    pub fn with_policy() -> Fields<T, P, ReadWrite> {
        Fields {
            fields: Vec::new(),
            _strategy: PhantomData,
        }
    }

    /// Appends a read-write descriptor registered under `name`.
    pub fn field<V>(mut self, name: &'static str, get: fn(&T) -> &V, set: fn(&mut T, V)) -> Self
    where
        V: Render<P> + Parse<P> + 'static,
    {
        self.fields.push(Field::readwrite::<P, V>(name, get, set));
        self
    }
}

impl<T: 'static, P: OutputPolicy> Fields<T, P, WriteOnly> {
    /// Starts a write-only list under policy `P`.
    pub fn with_policy() -> Fields<T, P, WriteOnly> {
        Fields {
            fields: Vec::new(),
            _strategy: PhantomData,
        }
    }

    /// Appends a render-only descriptor registered under `name`.
    pub fn field<V>(mut self, name: &'static str, get: fn(&T) -> &V) -> Self
    where
        V: Render<P> + 'static,
    {
        self.fields.push(Field::render_only::<P, V>(name, get));
        self
    }
}

impl<T, P, M> Fields<T, P, M> {
    /// Number of descriptors added so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> Box<[Field<T>]> {
        self.fields.into_boxed_slice()
    }
}
