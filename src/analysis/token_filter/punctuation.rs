//! Punctuation filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// Sentence punctuation removed from every token.
pub const SENTENCE_PUNCTUATION: &[char] = &['.', ',', '!', '?'];

/// A filter that deletes sentence punctuation anywhere inside a token.
///
/// Only `.`, `,`, `!` and `?` are removed; apostrophes and hyphens belong to the
/// word (`I'm` stays `I'm`). A token left empty is marked as stopped.
#[derive(Clone, Debug)]
pub struct PunctuationFilter {
    marks: Vec<char>,
}

impl PunctuationFilter {
    /// Create a new punctuation filter for the default sentence punctuation.
    pub fn new() -> Self {
        PunctuationFilter {
            marks: SENTENCE_PUNCTUATION.to_vec(),
        }
    }

    /// Create a punctuation filter removing a custom set of characters.
    pub fn with_marks(marks: &[char]) -> Self {
        PunctuationFilter {
            marks: marks.to_vec(),
        }
    }

    /// Characters removed by this filter.
    pub fn marks(&self) -> &[char] {
        &self.marks
    }
}

impl Default for PunctuationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let marks = &self.marks;
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let stripped: String = token.text.chars().filter(|c| !marks.contains(c)).collect();
                if stripped.is_empty() {
                    token.with_text(stripped).stop()
                } else {
                    token.with_text(stripped)
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
