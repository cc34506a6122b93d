//! Reading values from JSON documents.

use anyhow::{Context, Result};
use kstring::KString;

use crate::{myfrom::MyFrom, value::{Key, Value}};

/// Arrays become sequential containers, objects keyed containers (in
/// document order); integral numbers that fit become `Value::Int`.
pub fn value_from_json(j: &serde_json::Value) -> Value {
    match j {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Str(KString::myfrom(s.as_str())),
        serde_json::Value::Array(vs) => Value::list(vs.iter().map(value_from_json)),
        serde_json::Value::Object(m) => Value::Container(
            m.iter()
                .map(|(k, v)| (Key::Name(KString::myfrom(k.as_str())), value_from_json(v)))
                .collect()),
    }
}

pub fn value_from_json_str(s: &str) -> Result<Value> {
    let j: serde_json::Value = serde_json::from_str(s)
        .with_context(|| format!("parsing JSON value {s:?}"))?;
    Ok(value_from_json(&j))
}
