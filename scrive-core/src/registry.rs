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

//! Per-type field registries and the process-global registration store.
//!
//! A registry is built at most once per concrete type and then lives for
//! the rest of the program. Registration is first-wins: a second list
//! for the same type — from a repeated call or a racing thread — is
//! discarded and the caller gets the already-installed handle. The
//! check-and-install for one type happens atomically under a single
//! write lock, so no thread can observe a partially built registry.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, RwLock};

use crate::error::Error;
use crate::field::{Field, Fields};
use crate::mode::{Mode, Reversibility};
use crate::policy::OutputPolicy;
use crate::serializable::Reflectible;
use crate::source::Source;

type FrameFn = fn(&mut String);
type ParseObjectFn<T> = fn(&mut Source<'_>, &mut T, &Registry<T>) -> Result<(), Error>;

/// The per-type singleton: the ordered descriptors, the reversibility
/// mode, and the registering policy's framing and object-parsing
/// functions captured as plain `fn` pointers. The policy's type is
/// erased here, so the engine and the global store never name it.
pub struct Registry<T> {
    fields: Box<[Field<T>]>,
    mode: Mode,
    start_object: FrameFn,
    end_object: FrameFn,
    before_field: FrameFn,
    parse_object: Option<ParseObjectFn<T>>,
}

impl<T: 'static> Registry<T> {
    fn from_list<P, M>(list: Fields<T, P, M>) -> Registry<T>
    where
        P: OutputPolicy,
        M: Reversibility,
    {
        Registry {
            fields: list.into_fields(),
            mode: M::MODE,
            start_object: P::start_object,
            end_object: P::end_object,
            before_field: P::before_field,
            parse_object: match M::MODE {
                Mode::ReadWrite => Some(P::parse_object::<T> as ParseObjectFn<T>),
                Mode::WriteOnly => None,
            },
        }
    }
}

impl<T> Registry<T> {
    /// Descriptors in registration order.
    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    /// First descriptor registered under `name`.
    pub fn field_named(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn start_object(&self, out: &mut String) {
        (self.start_object)(out);
    }

    pub(crate) fn end_object(&self, out: &mut String) {
        (self.end_object)(out);
    }

    pub(crate) fn before_field(&self, out: &mut String) {
        (self.before_field)(out);
    }

    /// Runs the registering policy's whole-object parse, or succeeds
    /// without touching the input for a write-only registry.
    pub(crate) fn parse_object(&self, src: &mut Source<'_>, target: &mut T) -> Result<(), Error> {
        match self.parse_object {
            Some(parse) => parse(src, target, self),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.name()).collect();
        f.debug_struct("Registry")
            .field("type", &type_name::<T>())
            .field("mode", &self.mode)
            .field("fields", &names)
            .finish()
    }
}

type StoredRegistry = &'static (dyn Any + Send + Sync);

static REGISTRIES: LazyLock<RwLock<HashMap<TypeId, StoredRegistry>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Installs the registry built from `list` for `T`, unless one already
/// exists, and returns the installed handle either way.
///
/// First registration wins. A later list for the same type is dropped
/// without comment; this mirrors registration running from value
/// constructors, where repeat calls are routine rather than a bug.
pub fn register<T, P, M>(list: Fields<T, P, M>) -> &'static Registry<T>
where
    T: 'static,
    P: OutputPolicy,
    M: Reversibility,
{
    install::<T>(move || Registry::from_list(list))
}

/// Zero-argument opt-in for types that expose their own field list.
///
/// The `Reflectible` bound makes this path a compile error for any type
/// that never declared its fields.
pub fn register_reflectible<T: Reflectible>() -> &'static Registry<T> {
    install::<T>(|| Registry::from_list(T::reflect_fields()))
}

/// Handle for `T`'s registry. Panics if `T` was never registered:
/// serializing an unregistered type is a programming error and fails
/// fast instead of producing empty output.
pub fn get<T: 'static>() -> &'static Registry<T> {
    match lookup::<T>() {
        Some(registry) => registry,
        None => panic!(
            "no field registry for `{}`; register the type before serializing it",
            type_name::<T>()
        ),
    }
}

/// Handle for `T`'s registry, if registration has run.
pub fn lookup<T: 'static>() -> Option<&'static Registry<T>> {
    let map = REGISTRIES
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    map.get(&TypeId::of::<T>()).map(|stored| downcast::<T>(*stored))
}

fn install<T: 'static>(build: impl FnOnce() -> Registry<T>) -> &'static Registry<T> {
    let key = TypeId::of::<T>();
    {
        let map = REGISTRIES
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(existing) = map.get(&key) {
            return downcast::<T>(*existing);
        }
    }
    // Availability check and build both happen under the write lock:
    // exactly one caller constructs the registry for a type, everyone
    // else blocks until the winner has installed it.
    let mut map = REGISTRIES
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = map.get(&key) {
        return downcast::<T>(*existing);
    }
    let installed: &'static Registry<T> = Box::leak(Box::new(build()));
    map.insert(key, installed);
    installed
}

fn downcast<T: 'static>(stored: StoredRegistry) -> &'static Registry<T> {
    match stored.downcast_ref::<Registry<T>>() {
        Some(registry) => registry,
        None => unreachable!("registry stored under a foreign TypeId"),
    }
}
