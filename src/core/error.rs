//! Error types for rule construction

use thiserror::Error;

/// A user-supplied regular expression failed to compile.
///
/// Returned by [`Rule::regex`](crate::rules::Rule::regex). Malformed
/// patterns are rejected here, at construction, so that evaluation stays
/// total — a [`Rule`](crate::rules::Rule) that exists always evaluates.
///
/// # Examples
///
/// ```
/// use field_validator::Rule;
///
/// let err = Rule::regex("(unclosed").unwrap_err();
/// assert_eq!(err.pattern(), "(unclosed");
/// ```
#[derive(Debug, Error)]
#[error("pattern `{pattern}` failed to compile: {source}")]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_carries_pattern_and_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = PatternError::new("(", source);
        assert_eq!(err.pattern(), "(");
        assert!(err.source().is_some());
        assert!(err.to_string().contains("failed to compile"));
    }
}
