//! Reducing nested containers to one level.

use std::collections::HashMap;

use anyhow::Result;
use kstring::KString;

use crate::{evaluate::evaluate, value::{Key, Value}};

/// Ordered, one level deep mapping. Never contains containers,
/// array-convertible objects or deferred values.
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    entries: Vec<(Key, Value)>,
    // position of named entries in `entries`
    names: HashMap<KString, usize>,
    next_index: usize,
}

impl PartialEq for Flattened {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Flattened {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Key, Value)> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names.get(name).map(|i| &self.entries[*i].1)
    }

    /// Append under the next sequential key.
    pub fn push(&mut self, value: Value) {
        self.entries.push((Key::Index(self.next_index), value));
        self.next_index += 1;
    }

    /// Set or overwrite; an overwritten entry keeps its position.
    pub fn set(&mut self, name: KString, value: Value) {
        if let Some(i) = self.names.get(&name) {
            self.entries[*i].1 = value;
        } else {
            self.names.insert(name.clone(), self.entries.len());
            self.entries.push((Key::Name(name), value));
        }
    }

    pub fn insert(&mut self, key: &Key, value: Value) {
        match key {
            Key::Index(_) => self.push(value),
            Key::Name(name) => self.set(name.clone(), value),
        }
    }

    pub fn into_entries(self) -> Vec<(Key, Value)> {
        self.entries
    }

    pub fn into_value(self) -> Value {
        Value::Container(self.entries)
    }
}

/// Walk `inputs` (taken as a sequential container) depth first and
/// left to right, merging the entries of nested containers into the
/// result.
pub fn flatten(inputs: &[Value]) -> Result<Flattened> {
    let mut out = Flattened::default();
    for value in inputs {
        flatten_entry(&mut out, &Key::Index(0), value)?;
    }
    Ok(out)
}

fn flatten_entry(out: &mut Flattened, key: &Key, value: &Value) -> Result<()> {
    match value {
        Value::Deferred(_) => flatten_entry(out, key, &evaluate(value)?),
        Value::Container(entries) => flatten_entries(out, entries),
        Value::Object(obj) => match obj.to_container() {
            Some(entries) => flatten_entries(out, &entries),
            None => {
                out.insert(key, value.clone());
                Ok(())
            }
        },
        _ => {
            out.insert(key, value.clone());
            Ok(())
        }
    }
}

fn flatten_entries(out: &mut Flattened, entries: &[(Key, Value)]) -> Result<()> {
    for (k, v) in entries {
        flatten_entry(out, k, v)?;
    }
    Ok(())
}
