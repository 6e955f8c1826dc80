//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. It keeps the
//! byte offsets of the raw text it was cut from, so that filters may rewrite the
//! token text (strip punctuation, lowercase) while callers can still locate and
//! rewrite the original span.
//!
//! # Examples
//!
//! ```
//! use textio::analysis::token::Token;
//!
//! let token = Token::with_offsets("Man,", 0, 0, 4).with_text("man");
//! assert_eq!(token.text, "man");
//! assert_eq!(token.start_offset, 0);
//! assert_eq!(token.end_offset, 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where the raw span starts in the original text
    pub start_offset: usize,

    /// The byte offset where the raw span ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the token text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// The raw span of `source` this token was cut from.
    pub fn raw<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start_offset..self.end_offset]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.is_stopped());
        assert_eq!(token.len(), 5);
    }

    #[test]
    fn test_with_text_keeps_offsets() {
        let source = "Well, Man!";
        let token = Token::with_offsets("Man!", 1, 6, 10).with_text("man");
        assert_eq!(token.text, "man");
        assert_eq!(token.raw(source), "Man!");
        assert_eq!(token.to_string(), "man");
    }

    #[test]
    fn test_stop() {
        let token = Token::new("", 0).stop();
        assert!(token.is_stopped());
        assert!(token.is_empty());
    }
}
