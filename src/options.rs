//! Serializer settings, loadable from JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{attributes::{normalize_quote_char, DEFAULT_QUOTE_CHAR},
            def_boxed_thiserror,
            element::{build_html_element_with_width, DEFAULT_LINE_WIDTH},
            value::Value};

def_boxed_thiserror!(OptionsError, pub enum OptionsErrorKind {
    #[error("reading options file {path:?}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("parsing options")]
    Json(#[from] serde_json::Error),
});

/// Missing fields take their default values, e.g. `{"quote_char":
/// "'"}` is a complete options file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub escape_contents: bool,
    /// Only `"` and `'` are used, anything else means `"`.
    pub quote_char: char,
    pub line_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            escape_contents: true,
            quote_char: DEFAULT_QUOTE_CHAR,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(s: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, OptionsError> {
        let s = std::fs::read_to_string(path).map_err(
            |source| OptionsErrorKind::Io { path: path.to_owned(), source })?;
        Self::from_json_str(&s)
    }

    /// The quote character actually used.
    pub fn quote_char(&self) -> char {
        normalize_quote_char(self.quote_char)
    }

    pub fn build_html_element(
        &self,
        tag: &str,
        attributes: &[Value],
        contents: &[Value],
    ) -> anyhow::Result<String> {
        build_html_element_with_width(
            tag,
            attributes,
            contents,
            self.escape_contents,
            self.quote_char(),
            self.line_width)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_defaults() {
        assert_eq!(RenderOptions::from_json_str("{}").unwrap(), RenderOptions::default());
        let o = RenderOptions::from_json_str(r#"{"quote_char": "'", "line_width": 10}"#)
            .unwrap();
        assert_eq!(o.quote_char(), '\'');
        assert!(o.escape_contents);
        assert_eq!(o.line_width, 10);
    }

    #[test]
    fn t_bad_quote_falls_back() {
        let o = RenderOptions::from_json_str(r#"{"quote_char": "*"}"#).unwrap();
        assert_eq!(o.quote_char(), '"');
    }

    #[test]
    fn t_errors() {
        let e = RenderOptions::from_json_str(r#"{"quote": "'"}"#).unwrap_err();
        assert!(matches!(e.kind(), OptionsErrorKind::Json(_)));
        let e = RenderOptions::from_json_path(Path::new("/nonexistent/options.json"))
            .unwrap_err();
        assert!(matches!(e.kind(), OptionsErrorKind::Io { .. }));
    }

    #[test]
    fn t_line_width() {
        let o = RenderOptions { line_width: 8, ..Default::default() };
        assert_eq!(o.build_html_element("b", &[], &["bold".into()]).unwrap(),
                   "<b>\nbold\n</b>");
        assert_eq!(RenderOptions::default()
                   .build_html_element("b", &[], &["bold".into()]).unwrap(),
                   "<b>bold</b>");
    }
}
