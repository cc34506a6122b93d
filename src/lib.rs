//! Rendering trees of (possibly deferred, possibly nested) values
//! into a single HTML element string.
//!
//! The pipeline for one element: evaluate deferred values, flatten
//! containers, then normalize the attributes and serialize the
//! contents, and finally compose the tag, attributes and contents
//! (`element::build_html_element`).
//!
//! ```
//! use htmlelement::{build_html_element, Value};
//!
//! let html = build_html_element(
//!     "button",
//!     &[Value::map([
//!         ("class", Value::list([Value::from("btn"),
//!                                Value::map([("active", false)])])),
//!         ("disabled", Value::from(true)),
//!     ])],
//!     &["Send".into()],
//!     true,
//!     '"',
//! ).unwrap();
//! assert_eq!(html, "<button class=\"btn\" disabled>Send</button>");
//! ```

use std::sync::atomic::AtomicBool;

pub mod boxed_error;
pub mod myfrom;
pub mod value;
pub mod evaluate;
pub mod flatten;
pub mod escape;
pub mod attributes;
pub mod contents;
pub mod element;
pub mod options;
pub mod json;

pub use attributes::build_attributes_string;
pub use contents::build_contents_string;
pub use element::{build_html_element, HtmlElement};
pub use evaluate::evaluate;
pub use flatten::{flatten, Flattened};
pub use options::RenderOptions;
pub use value::{HtmlObject, Key, Value};

/// Set to print dropped content and omitted attributes to stderr.
pub static HTMLELEMENT_TRACE: AtomicBool = AtomicBool::new(false);
