//! HTML escaping
//!
//! Text escaping covers `&`, `<`, `>` and `"`. Attribute escaping adds the
//! apostrophe so values are safe in single-quoted attributes too.

/// Escape text for HTML element content
pub fn escape_text(s: &str) -> String {
    escape(s, false)
}

/// Escape a value for an HTML attribute (also escapes `'`)
pub fn escape_attr(s: &str) -> String {
    escape(s, true)
}

/// Percent-encode the characters that would end a relative URL path early.
///
/// Only `%`, `#` and `?` are encoded; markup characters are left for
/// `escape_attr` so they still appear as entities in `href`/`src`.
pub fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            _ => out.push(c),
        }
    }
    out
}

fn escape(s: &str, apostrophe: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' if apostrophe => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text(r#"<script>&"'"#),
            "&lt;script&gt;&amp;&quot;'"
        );
        assert_eq!(escape_text("桜 2003"), "桜 2003");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"<script>&"'"#),
            "&lt;script&gt;&amp;&quot;&#39;"
        );
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("a#1?.jpg"), "a%231%3F.jpg");
        assert_eq!(encode_path_segment("100%.png"), "100%25.png");
        // Markup characters are left for attribute escaping
        assert_eq!(encode_path_segment("<a&b>.jpg"), "<a&b>.jpg");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        // Existing entities are not special
        assert_eq!(escape_attr("&amp;"), "&amp;amp;");
    }
}
