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

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use scrive::{registry, Fields, Registry, Serializable};

#[derive(Default)]
struct Raced {
    seq: u32,
}

impl Serializable for Raced {
    fn registry() -> &'static Registry<Raced> {
        registry::register(
            Fields::new().field("seq", |r: &Raced| &r.seq, |r: &mut Raced, v| r.seq = v),
        )
    }
}

#[test]
fn racing_registrations_build_one_registry() {
    const THREADS: usize = 16;

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = vec![];
    for seq in 0..THREADS as u32 {
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let value = Raced { seq };
            let registry = Raced::registry() as *const Registry<Raced> as usize;
            (registry, value.to_text())
        }));
    }

    let mut registries = HashSet::new();
    let mut texts = HashSet::new();
    for handle in handles {
        let (registry, text) = handle.join().unwrap();
        registries.insert(registry);
        texts.insert(text);
    }

    // Every thread saw the same fully built registry and serialized
    // through it correctly.
    assert_eq!(registries.len(), 1);
    let expected: HashSet<String> = (0..THREADS as u32)
        .map(|seq| format!(r#"{{"seq":{seq}}}"#))
        .collect();
    assert_eq!(texts, expected);
}

#[test]
fn serialization_runs_in_parallel_across_instances() {
    #[derive(scrive::Reflectible, Default, Debug, PartialEq)]
    struct Sample {
        n: i64,
    }

    // Warm the registry once, then hammer it from many threads.
    Sample::registry();
    let mut handles = vec![];
    for n in 0..8 {
        handles.push(thread::spawn(move || {
            let value = Sample { n };
            let text = value.to_text();
            Sample::from_text(&text).unwrap()
        }));
    }
    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Sample { n: n as i64 });
    }
}
