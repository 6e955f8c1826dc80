//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TextioError};

/// Every maximal run of characters other than a plain space.
///
/// Equivalent to splitting on single spaces and dropping the empty pieces.
pub const SPACE_SEPARATED_PATTERN: &str = r"[^ ]+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default space-separated pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(SPACE_SEPARATED_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TextioError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("Man, I am").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Man,");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 4);

        assert_eq!(tokens[2].text, "am");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 7);
        assert_eq!(tokens[2].end_offset, 9);
    }

    #[test]
    fn test_repeated_spaces_produce_no_empty_tokens() {
        let tokenizer = RegexTokenizer::default();
        let tokens: Vec<String> = tokenizer
            .tokenize("  hello   world ")
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_only_plain_spaces_separate() {
        let tokenizer = RegexTokenizer::default();
        let tokens: Vec<Token> = tokenizer.tokenize("tab\tseparated").collect();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::default().name(), "regex");
        assert_eq!(RegexTokenizer::default().pattern(), SPACE_SEPARATED_PATTERN);
    }
}
