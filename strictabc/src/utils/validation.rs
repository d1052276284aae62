//! Identifier validation shared by signatures, interfaces and records.
//!
//! Operation names, parameter names and record keys all follow the same
//! rule: a Unicode identifier (`XID_Start` or `_`, then `XID_Continue`) that
//! is not a reserved word.

use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$")
        .unwrap_or_else(|e| panic!("identifier pattern failed to compile: {e}"))
});

/// Hard keywords that can never be used as names.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Soft keywords, reserved only in some positions but rejected as record keys.
pub const SOFT_KEYWORDS: &[&str] = &["_", "case", "match", "type"];

/// Returns true if `name` is syntactically an identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Returns true if `name` is a hard keyword.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Returns true if `name` is a soft keyword.
#[must_use]
pub fn is_soft_keyword(name: &str) -> bool {
    SOFT_KEYWORDS.contains(&name)
}

/// Validates a name used for an operation or parameter.
///
/// Soft keywords are allowed here (`def match(self)` is legal); hard
/// keywords are not.
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError::new(name, "name cannot be empty"));
    }
    if !is_identifier(name) {
        return Err(InvalidNameError::new(name, "not a valid identifier"));
    }
    if is_keyword(name) {
        return Err(InvalidNameError::new(name, "reserved keyword"));
    }
    Ok(())
}

/// Returns true if `name` may be used as a record key.
#[must_use]
pub fn is_valid_key(name: &str) -> bool {
    is_identifier(name) && !is_keyword(name) && !is_soft_keyword(name)
}

/// Error indicating an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid name '{name}': {reason}")]
pub struct InvalidNameError {
    /// The rejected name.
    pub name: String,
    /// The reason the name is invalid.
    pub reason: String,
}

impl InvalidNameError {
    /// Creates a new invalid name error.
    #[must_use]
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("bar"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("a1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("]"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_validate_name_ok() {
        assert!(validate_name("bar").is_ok());
        assert!(validate_name("match").is_ok());
        assert!(validate_name("self").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_keywords() {
        let err = validate_name("class").unwrap_err();
        assert_eq!(err.name, "class");
        assert_eq!(err.to_string(), "Invalid name 'class': reserved keyword");
    }

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("a"));
        assert!(!is_valid_key("type"));
        assert!(!is_valid_key("None"));
        assert!(!is_valid_key("]"));
    }
}
