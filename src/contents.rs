//! Turning content inputs into the body of an element.

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use chj_util::trace;

use crate::{HTMLELEMENT_TRACE,
            escape::html_escape,
            evaluate::evaluate,
            flatten::flatten,
            myfrom::MyFrom,
            value::{Key, Value}};

fn is_blank_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank_char)
}

// Preserialized HTML is used as is, but still dropped when it's only
// whitespace.
fn markup(html: String) -> Option<String> {
    if trim_blank(&html).is_empty() {
        None
    } else {
        Some(html)
    }
}

/// The fragment for one flattened entry, `None` if the entry doesn't
/// produce any content.
fn content_fragment(key: &Key, value: &Value, escape: bool) -> Result<Option<String>> {
    let value = match value {
        Value::Element(el) => return Ok(markup(el.to_html()?)),
        Value::Object(obj) => {
            if let Some(html) = obj.to_html() {
                return Ok(markup(html));
            }
            match obj.to_kstring() {
                Some(s) => Value::Str(s),
                None => {
                    trace!(HTMLELEMENT_TRACE, "dropping content object {obj:?}");
                    return Ok(None);
                }
            }
        }
        Value::Deferred(_) | Value::Container(_) => {
            // flatten never leaves these
            trace!(HTMLELEMENT_TRACE, "dropping unflattened content {value:?}");
            return Ok(None);
        }
        _ => value.clone(),
    };

    // {"label": cond} shows "label" iff cond
    let value = match key {
        Key::Name(name) if !trim_blank(name).is_empty() && value.is_truthy() =>
            Value::Str(name.clone()),
        _ => value,
    };

    let text = match value {
        Value::Str(s) => s,
        Value::Int(i) => KString::myfrom(i),
        Value::Float(f) => KString::myfrom(f),
        _ => return Ok(None),
    };
    let text = trim_blank(&text);
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(if escape {
        html_escape(text)
    } else {
        text.to_string()
    }))
}

/// Evaluate and flatten `contents` and join the resulting fragments
/// with newlines. Text is HTML-escaped if `escape` is true; nested
/// elements and objects providing HTML never are.
pub fn build_contents_string(contents: &[Value], escape: bool) -> Result<String> {
    let evaluated = contents.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
    let mut fragments = Vec::new();
    for (key, value) in flatten(&evaluated)?.iter() {
        if let Some(fragment) = content_fragment(key, value, escape)? {
            fragments.push(fragment);
        }
    }
    Ok(fragments.iter().join("\n"))
}
