use lazy_static::*;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    static ref RESERVED_REGEX: Regex = Regex::new(r#"[&<>"']"#).expect("Regex compilation error");
}

/// Replaces the five markup-significant characters with their entities.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    RESERVED_REGEX.replace_all(text, |caps: &Captures| match &caps[0] {
        "&" => "&amp;",
        "<" => "&lt;",
        ">" => "&gt;",
        "\"" => "&quot;",
        _ => "&#039;",
    })
}

#[cfg(test)]
mod tests {
    use super::escape_html;
    use std::borrow::Cow;

    #[test]
    fn test_escape_all_reserved_characters() {
        assert_eq!(
            escape_html(r#"<script>&"'</script>"#),
            "&lt;script&gt;&amp;&quot;&#039;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let escaped = escape_html("valid login");

        assert_eq!(escaped, "valid login");
        assert!(matches!(escaped, Cow::Borrowed(_)));
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
