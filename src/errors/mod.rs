//! Error handling for Logic Bridge
//!
//! Every phase reports problems against a 1-based source line. The
//! preprocessor rewrites line by line, so these lines are valid both in the
//! normalized text and in the user's original source.

mod diagnostic;

use serde::Serialize;
use thiserror::Error;

pub use diagnostic::{format_error, line_span, print_error, print_errors};

/// The main error type for Logic Bridge operations
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Parser error: {message}")]
    Parser { message: String, line: usize },

    #[error("Semantic error: {message}")]
    Semantic { message: String, line: usize },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Get the source line associated with this error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            BridgeError::Parser { line, .. } => Some(*line),
            BridgeError::Semantic { line, .. } => Some(*line),
            BridgeError::UnsupportedLanguage(_) => None,
            BridgeError::Internal { .. } => None,
            BridgeError::Io(_) => None,
        }
    }

    /// The bare message, without the phase prefix added by `Display`
    pub fn message(&self) -> String {
        match self {
            BridgeError::Parser { message, .. }
            | BridgeError::Semantic { message, .. }
            | BridgeError::Internal { message } => message.clone(),
            BridgeError::UnsupportedLanguage(lang) => format!("Unsupported language: {}", lang),
            BridgeError::Io(e) => e.to_string(),
        }
    }

    /// Create a parser error
    pub fn parser(message: impl Into<String>, line: usize) -> Self {
        BridgeError::Parser {
            message: message.into(),
            line,
        }
    }

    /// Create a semantic error
    pub fn semantic(message: impl Into<String>, line: usize) -> Self {
        BridgeError::Semantic {
            message: message.into(),
            line,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        BridgeError::Internal {
            message: message.into(),
        }
    }

    /// Convert into the `{line, message}` shape handed to clients
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            line: self.line().unwrap_or(0),
            message: self.message(),
        }
    }
}

/// Result type alias for Logic Bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// A serializable error entry; line 0 means "unknown"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl From<&BridgeError> for Diagnostic {
    fn from(error: &BridgeError) -> Self {
        error.to_diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_strips_phase_prefix() {
        let err = BridgeError::parser("Expected THEN after condition", 4);
        assert_eq!(err.to_string(), "Parser error: Expected THEN after condition");
        assert_eq!(
            err.to_diagnostic(),
            Diagnostic {
                line: 4,
                message: "Expected THEN after condition".to_string()
            }
        );
    }

    #[test]
    fn test_unlocated_errors_report_line_zero() {
        let err = BridgeError::internal("boom");
        assert_eq!(err.line(), None);
        assert_eq!(err.to_diagnostic().line, 0);
    }
}
