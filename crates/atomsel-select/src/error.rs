//! Error type for selection parsing
//!
//! Parsing is the only fallible operation in the engine; evaluation is total.

use thiserror::Error;

/// A selection syntax error.
///
/// Carries a human-readable message and, where determinable, the byte
/// offset into the input string where parsing failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection syntax error: {message}")]
pub struct SelectionError {
    message: String,
    offset: Option<usize>,
}

impl SelectionError {
    /// Create an error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        SelectionError {
            message: message.into(),
            offset: None,
        }
    }

    /// Create an error with a message and input offset.
    pub fn at(message: impl Into<String>, offset: usize) -> Self {
        SelectionError {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the input where parsing failed, if known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SelectionError::new("unknown keyword: foobar");
        assert_eq!(
            format!("{}", err),
            "selection syntax error: unknown keyword: foobar"
        );
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_offset() {
        let err = SelectionError::at("unmatched parenthesis", 7);
        assert_eq!(err.offset(), Some(7));
        assert_eq!(err.message(), "unmatched parenthesis");
    }
}
