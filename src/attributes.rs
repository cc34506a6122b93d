//! Turning attribute inputs into ` name="value"` fragments.

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use chj_util::trace;

use crate::{HTMLELEMENT_TRACE,
            escape::html_escape_into,
            evaluate::evaluate,
            flatten::{flatten, Flattened},
            value::{Key, Value}};

pub const DEFAULT_QUOTE_CHAR: char = '"';

/// The final value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `true`: boolean attribute, printed without value. `false`:
    /// omitted.
    Bool(bool),
    Text(KString),
}

/// `"` or `'`; anything else falls back to `"`.
pub fn normalize_quote_char(quote_char: char) -> char {
    match quote_char {
        '"' | '\'' => quote_char,
        _ => DEFAULT_QUOTE_CHAR,
    }
}

/// Flatten attribute inputs: named entries are kept as they are
/// (including list values), positional containers are merged in,
/// other positional values become the name of a boolean attribute.
pub fn flatten_attributes(attributes: &[Value]) -> Result<Flattened> {
    let mut out = Flattened::default();
    for value in attributes {
        collect_attribute(&mut out, &Key::Index(0), value)?;
    }
    Ok(out)
}

fn collect_attribute(out: &mut Flattened, key: &Key, value: &Value) -> Result<()> {
    match key {
        Key::Name(name) => out.set(name.clone(), value.clone()),
        Key::Index(_) => match value {
            Value::Deferred(_) => collect_attribute(out, key, &evaluate(value)?)?,
            Value::Container(entries) => {
                for (k, v) in entries {
                    collect_attribute(out, k, v)?;
                }
            }
            _ => {
                if let Some(entries) = as_container(value) {
                    for (k, v) in &entries {
                        collect_attribute(out, k, v)?;
                    }
                } else {
                    match value.to_text() {
                        Some(name) if !name.trim().is_empty() =>
                            out.set(name, Value::Bool(true)),
                        _ => trace!(HTMLELEMENT_TRACE,
                                    "skipping positional attribute {value:?}"),
                    }
                }
            }
        },
    }
    Ok(())
}

fn as_container(value: &Value) -> Option<Vec<(Key, Value)>> {
    match value {
        Value::Object(obj) => obj.to_container(),
        _ => None,
    }
}

/// A list value: positional entries are tokens, named entries toggle
/// their key as token on or off.
fn join_tokens(name: &str, entries: Vec<(Key, Value)>) -> Result<AttributeValue> {
    let flat = flatten(&[Value::Container(entries)])?;
    let mut tokens: Vec<KString> = Vec::new();
    for (key, value) in flat.iter() {
        match key {
            Key::Index(_) => {
                let token = match value {
                    Value::Element(el) => Some(KString::from_string(el.to_html()?)),
                    _ => value.to_text(),
                };
                match token {
                    Some(token) if !token.trim().is_empty() => {
                        if !tokens.contains(&token) {
                            tokens.push(token);
                        }
                    }
                    _ => (),
                }
            }
            Key::Name(token) => {
                if value.is_truthy() {
                    if !tokens.contains(token) {
                        tokens.push(token.clone());
                    }
                } else {
                    tokens.retain(|t| t != token);
                }
            }
        }
    }
    if tokens.is_empty() {
        return Ok(AttributeValue::Bool(false));
    }
    let separator = if name == "class" { " " } else { "," };
    Ok(AttributeValue::Text(KString::from_string(tokens.iter().join(separator))))
}

fn attribute_value(name: &str, value: &Value) -> Result<AttributeValue> {
    Ok(match value {
        Value::Null => AttributeValue::Bool(false),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Str(s) => AttributeValue::Text(s.clone()),
        Value::Int(_) | Value::Float(_) => match value.to_text() {
            Some(s) => AttributeValue::Text(s),
            None => AttributeValue::Bool(false),
        },
        Value::Deferred(_) => attribute_value(name, &evaluate(value)?)?,
        Value::Container(entries) => join_tokens(name, entries.clone())?,
        Value::Object(obj) => {
            if let Some(entries) = obj.to_container() {
                join_tokens(name, entries)?
            } else if let Some(s) = obj.to_kstring() {
                AttributeValue::Text(s)
            } else {
                AttributeValue::Bool(false)
            }
        }
        Value::Element(el) => AttributeValue::Text(KString::from_string(el.to_html()?)),
    })
}

/// Non-empty and free of whitespace, control characters and `"'>/=`,
/// which would end the name (or the tag) early.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| c.is_whitespace()
                             || c.is_control()
                             || matches!(c, '"' | '\'' | '>' | '/' | '='))
}

/// Evaluate and flatten `attributes`, returning the attributes to
/// print in order. Never contains `AttributeValue::Bool(false)`.
pub fn normalize_attributes(attributes: &[Value]) -> Result<Vec<(KString, AttributeValue)>> {
    let evaluated = attributes.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
    let mut out = Vec::new();
    for (key, value) in flatten_attributes(&evaluated)?.iter() {
        let name = match key {
            Key::Name(name) => name,
            // flatten_attributes only produces named entries
            Key::Index(_) => continue,
        };
        if !is_valid_attribute_name(name) {
            trace!(HTMLELEMENT_TRACE, "skipping attribute with invalid name {name:?}");
            continue;
        }
        match attribute_value(name, value)? {
            AttributeValue::Bool(false) =>
                trace!(HTMLELEMENT_TRACE, "omitting attribute {name:?}"),
            v => out.push((name.clone(), v)),
        }
    }
    Ok(out)
}

/// The attribute part of an opening tag: each attribute preceded by
/// a space, values escaped and quoted with `quote_char` (see
/// `normalize_quote_char`).
pub fn build_attributes_string(attributes: &[Value], quote_char: char) -> Result<String> {
    let quote = normalize_quote_char(quote_char);
    let mut out = String::new();
    for (name, value) in normalize_attributes(attributes)? {
        out.push(' ');
        out.push_str(&name);
        match value {
            AttributeValue::Bool(_) => (),
            AttributeValue::Text(text) => {
                out.push('=');
                out.push(quote);
                html_escape_into(&mut out, &text);
                out.push(quote);
            }
        }
    }
    Ok(out)
}
