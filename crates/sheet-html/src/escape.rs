//! Escaping of cell text for HTML

use std::borrow::Cow;

/// Escape text for use as element content or inside a double-quoted
/// attribute value
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
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
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("Total 42"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
    }
}
