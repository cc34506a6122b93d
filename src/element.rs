//! Composing tag, attributes and contents into an element.

use std::fmt;

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use element_meta::meta::METADB;

use crate::{attributes::{build_attributes_string, DEFAULT_QUOTE_CHAR},
            contents::build_contents_string,
            escape::html_escape,
            myfrom::MyFrom,
            options::RenderOptions,
            value::Value};

/// Width above which an element is laid out on multiple lines.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// An element used as a value, e.g. as child in the contents of
/// another element.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    pub tag: KString,
    pub attributes: Vec<Value>,
    pub contents: Vec<Value>,
    pub escape_contents: bool,
    pub quote_char: char,
}

impl HtmlElement {
    pub fn new<T>(tag: T, attributes: Vec<Value>, contents: Vec<Value>) -> Self
    where KString: MyFrom<T>
    {
        HtmlElement {
            tag: KString::myfrom(tag),
            attributes,
            contents,
            escape_contents: true,
            quote_char: DEFAULT_QUOTE_CHAR,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        RenderOptions {
            escape_contents: self.escape_contents,
            quote_char: self.quote_char,
            ..RenderOptions::default()
        }.build_html_element(&self.tag, &self.attributes, &self.contents)
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_html() {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "<!-- error rendering {:?}: {} -->", self.tag.as_str(), e),
        }
    }
}

/// Join the non-empty parts, with newlines if the result would be
/// wider than `line_width` or the content spans multiple lines.
pub fn layout(opening: &str, content: &str, closing: &str, line_width: usize) -> String {
    let width = opening.chars().count()
        + content.chars().count()
        + closing.chars().count();
    let mut parts = [opening, content, closing].into_iter().filter(|p| !p.is_empty());
    if width > line_width || content.contains('\n') {
        parts.join("\n")
    } else {
        parts.collect()
    }
}

/// Serialize one element. Void elements (see `element_meta`) get no
/// closing tag, unless there is content.
pub fn build_html_element_with_width(
    tag: &str,
    attributes: &[Value],
    contents: &[Value],
    escape_contents: bool,
    quote_char: char,
    line_width: usize,
) -> Result<String> {
    let tag = html_escape(tag);
    let opening = format!("<{}{}>", tag, build_attributes_string(attributes, quote_char)?);
    let content = build_contents_string(contents, escape_contents)?;
    let closing = if METADB.is_void(&tag) && content.is_empty() {
        String::new()
    } else {
        format!("</{}>", tag)
    };
    Ok(layout(&opening, &content, &closing, line_width))
}

pub fn build_html_element(
    tag: &str,
    attributes: &[Value],
    contents: &[Value],
    escape_contents: bool,
    quote_char: char,
) -> Result<String> {
    build_html_element_with_width(
        tag, attributes, contents, escape_contents, quote_char, DEFAULT_LINE_WIDTH)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn t(tag: &str, attributes: &[Value], contents: &[Value]) -> String {
        build_html_element(tag, attributes, contents, true, '"').unwrap()
    }

    #[test]
    fn t_void() {
        assert_eq!(t("br", &[], &[]), "<br>");
        assert_eq!(t("IMG", &[Value::map([("src", "a.png")])], &[]), "<IMG src=\"a.png\">");
        assert_eq!(t("input", &["disabled".into()], &[Value::Null, "".into()]),
                   "<input disabled>");
    }

    #[test]
    fn t_void_with_content_gets_closing_tag() {
        assert_eq!(t("br", &[], &["oops".into()]), "<br>oops</br>");
    }

    #[test]
    fn t_simple() {
        assert_eq!(t("div", &[Value::map(Vec::<(&str, Value)>::new())], &["hi".into()]),
                   "<div>hi</div>");
        assert_eq!(t("p", &[], &[]), "<p></p>");
    }

    #[test]
    fn t_multiline_content() {
        assert_eq!(t("div", &[], &["line1\nline2".into()]), "<div>\nline1\nline2\n</div>");
        assert_eq!(t("ul", &[], &["a".into(), "b".into()]), "<ul>\na\nb\n</ul>");
    }

    #[test]
    fn t_long_line() {
        let text = "x".repeat(70);
        let single = t("p", &[], &[text.clone().into()]);
        assert_eq!(single, format!("<p>{text}</p>"));
        assert_eq!(single.len(), 77);
        let text = "x".repeat(74);
        assert_eq!(t("p", &[], &[text.clone().into()]), format!("<p>\n{text}\n</p>"));
        // exactly 80 stays on one line
        let text = "x".repeat(73);
        assert_eq!(t("p", &[], &[text.clone().into()]), format!("<p>{text}</p>"));
    }

    #[test]
    fn t_long_void_has_no_empty_parts() {
        let src = "y".repeat(90);
        assert_eq!(t("img", &[Value::map([("src", src.as_str())])], &[]),
                   format!("<img src=\"{src}\">"));
        assert_eq!(t("div", &[Value::map([("title", src.as_str())])], &[]),
                   format!("<div title=\"{src}\">\n</div>"));
    }

    #[test]
    fn t_tag_escaped() {
        assert_eq!(t("a<b", &[], &[]), "<a&lt;b></a&lt;b>");
    }

    #[test]
    fn t_nested() {
        let li = |s: &str| Value::from(HtmlElement::new("li", vec![], vec![s.into()]));
        assert_eq!(
            t("ul", &[Value::map([("class", "menu")])], &[li("a"), li("b & c")]),
            "<ul class=\"menu\">\n<li>a</li>\n<li>b &amp; c</li>\n</ul>");
    }

    #[test]
    fn t_raw_and_quote() {
        assert_eq!(
            build_html_element("div", &[Value::map([("id", "x")])], &["<hr>".into()],
                               false, '\'').unwrap(),
            "<div id='x'><hr></div>");
    }

    #[test]
    fn t_layout() {
        assert_eq!(layout("<a>", "", "</a>", 80), "<a></a>");
        assert_eq!(layout("<a>", "", "</a>", 3), "<a>\n</a>");
        assert_eq!(layout("<br>", "", "", 1), "<br>");
    }

    #[test]
    fn t_element_display() {
        let mut el = HtmlElement::new("em", vec![], vec!["<x>".into()]);
        assert_eq!(el.to_string(), "<em>&lt;x&gt;</em>");
        el.escape_contents = false;
        assert_eq!(el.to_string(), "<em><x></em>");
        let failing = HtmlElement::new(
            "em", vec![], vec![Value::deferred(|| anyhow::bail!("nope"))]);
        assert_eq!(failing.to_string(), "<!-- error rendering \"em\": nope -->");
        assert!(failing.to_html().is_err());
    }
}
