//! Declaration value and name checks.
//!
//! Values come from user-editable layers and end up inside a `<style>`
//! element, so anything that could close the declaration, the rule or the
//! element is refused.

use cssparser::{Parser, ParserInput, Token};

/// Returns true if `value` can be emitted as a single declaration value.
///
/// Rejects top-level `;`, `{`, `}`, unterminated strings or URLs and any
/// raw `<`.
pub fn is_safe_value(value: &str) -> bool {
    if value.contains('<') {
        return false;
    }
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    while let Ok(token) = parser.next_including_whitespace_and_comments() {
        match token {
            Token::Semicolon
            | Token::CurlyBracketBlock
            | Token::CloseCurlyBracket
            | Token::BadString(_)
            | Token::BadUrl(_) => return false,
            _ => {}
        }
    }
    true
}

/// Escapes `name` so it is a valid CSS identifier tail.
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_name(name, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_values() {
        assert!(is_safe_value("#52accc"));
        assert!(is_safe_value("16px"));
        assert!(is_safe_value("rgba(0, 0, 0, 0.5)"));
        assert!(is_safe_value("\"Helvetica Neue\", sans-serif"));
        assert!(is_safe_value("url(image.png)"));
        assert!(is_safe_value("calc(1rem + 2px)"));
    }

    #[test]
    fn test_unsafe_values() {
        assert!(!is_safe_value("red; color: blue"));
        assert!(!is_safe_value("red } body { display: none"));
        assert!(!is_safe_value("red {"));
        assert!(!is_safe_value("\"unterminated\n"));
        assert!(!is_safe_value("</style><script>"));
    }

    #[test]
    fn test_escape_name() {
        assert_eq!(escape_name("--wp--color--text"), "--wp--color--text");
        assert_eq!(escape_name("heading 1"), "heading\\ 1");
    }
}
