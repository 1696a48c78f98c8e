//! Input validators used by the forms of the cafeteria pages.
//!
//! All three are total: they answer `false` for anything they do not accept.

use std::sync::LazyLock;

use regex::Regex;

/// Something@something.something, with no whitespace and exactly one `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern")
});

/// Returns true if `email` looks like an email address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if `id` (a student matricula) is one or more ASCII digits.
pub fn validate_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `value` is a finite number strictly greater than zero.
///
/// Surrounding whitespace is ignored; anything else after the number is not.
pub fn validate_value(value: &str) -> bool {
    parse_amount(value).is_some_and(|amount| amount > 0.0)
}

/// Parses a decimal amount, rejecting infinities and NaN.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    // f64's parser also accepts "inf"/"nan" spellings
    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("aluno.silva@escola.edu.br"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("noatsign.com"));
        assert!(!validate_email("two@@signs.com"));
        assert!(!validate_email("with space@x.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("12345"));
        assert!(validate_id("0"));
        assert!(!validate_id("12a45"));
        assert!(!validate_id(""));
        assert!(!validate_id(" 123"));
        assert!(!validate_id("-1"));
        // Non-ASCII digits are not matricula digits
        assert!(!validate_id("١٢٣"));
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value("3.5"));
        assert!(validate_value("8"));
        assert!(validate_value(" 0.01 "));
        assert!(validate_value("1e3"));
        assert!(!validate_value("0"));
        assert!(!validate_value("-1"));
        assert!(!validate_value("abc"));
        assert!(!validate_value(""));
        assert!(!validate_value("3.5abc"));
        assert!(!validate_value("Infinity"));
        assert!(!validate_value("inf"));
        assert!(!validate_value("NaN"));
        assert!(!validate_value("1e400"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3.50"), Some(3.5));
        assert_eq!(parse_amount("-2"), Some(-2.0));
        assert_eq!(parse_amount("x"), None);
    }
}
