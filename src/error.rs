//! Error types for the Textio library.
//!
//! Coverage planning and sentence rewriting never fail: a sentence that cannot be
//! rewritten or a word that cannot be covered is reported as data. Errors only
//! exist at the boundaries (input validation, loading corpus, catalog and
//! configuration files) and are all represented by [`TextioError`].
//!
//! # Examples
//!
//! ```
//! use textio::error::{Result, TextioError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextioError::invalid_argument("chunk size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Textio operations.
#[derive(Error, Debug)]
pub enum TextioError {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected input (empty message, bad chunk size, unknown platform, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Corpus loading errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Transformation catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with TextioError.
pub type Result<T> = std::result::Result<T, TextioError>;

impl TextioError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextioError::InvalidArgument(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TextioError::Corpus(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        TextioError::Catalog(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextioError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextioError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = TextioError::invalid_argument("empty message");
        assert_eq!(error.to_string(), "Invalid argument: empty message");

        let error = TextioError::corpus("missing sentences");
        assert_eq!(error.to_string(), "Corpus error: missing sentences");

        let error = TextioError::catalog("bad rule");
        assert_eq!(error.to_string(), "Catalog error: bad rule");

        let error = TextioError::config("no separators");
        assert_eq!(error.to_string(), "Config error: no separators");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let textio_error = TextioError::from(json_error);
        assert!(textio_error.to_string().starts_with("JSON error:"));
    }
}
