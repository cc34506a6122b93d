//! HTML entity escaping.

/// Append `s` to `out`, replacing the characters with special
/// meaning in HTML text and quoted attribute values.
pub fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    html_escape_into(&mut out, s);
    out
}

/// Inverse of `html_escape`; decodes all named entities as well as
/// decimal and hex character references.
pub fn html_unescape(s: &str) -> String {
    ::html_escape::decode_html_entities(s).into_owned()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_escape() {
        assert_eq!(html_escape(""), "");
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(html_escape("x\"y"), "x&quot;y");
        assert_eq!(html_escape("<a href='x'>&</a>"),
                   "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
        assert_eq!(html_escape("&amp;"), "&amp;amp;");
        assert_eq!(html_escape("Grüße"), "Grüße");
    }

    #[test]
    fn t_unescape() {
        assert_eq!(html_unescape("a &lt;b&gt; &amp;&amp; &#039;c&apos;"), "a <b> && 'c'");
        assert_eq!(html_unescape("&nbsp;"), "\u{a0}");
        assert_eq!(html_unescape("a & b"), "a & b");
        assert_eq!(html_unescape("trailing &"), "trailing &");
    }

    #[test]
    fn t_unescape_numeric() {
        assert_eq!(html_unescape("&#60;b&#x3E; &#34;"), "<b> \"");
        assert_eq!(html_unescape("&#x27;&#8364;"), "'\u{20ac}");
    }

    #[test]
    fn t_roundtrip() {
        for s in ["", "<>&\"'", "if a < b && c > \"d\" then 'e'", "&lt; already",
                  "ä & ö <ü>"] {
            assert_eq!(html_unescape(&html_escape(s)), s);
        }
    }
}
