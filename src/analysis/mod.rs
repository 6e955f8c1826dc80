//! Text analysis for Textio.
//!
//! Every component agrees on one notion of "word": a run of characters between
//! plain spaces, with `. , ! ?` removed, compared case-insensitively. The corpus
//! index, the coverage planner and the sentence transformer all go through the
//! analyzers defined here so that a word found by one is found by the others.

use std::sync::LazyLock;

pub mod analyzer;
pub mod rewrite;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, WordAnalyzer};
pub use rewrite::{replace_phrase, replace_word};
pub use token::{Token, TokenStream};
pub use token_filter::punctuation::SENTENCE_PUNCTUATION;
pub use token_filter::{Filter, LowercaseFilter, PunctuationFilter, RemoveEmptyFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};

static TERM_ANALYZER: LazyLock<WordAnalyzer> = LazyLock::new(WordAnalyzer::lowercased);
static WORD_ANALYZER: LazyLock<WordAnalyzer> = LazyLock::new(WordAnalyzer::new);

/// The shared lowercasing analyzer.
pub fn term_analyzer() -> &'static WordAnalyzer {
    &TERM_ANALYZER
}

/// Lowercased, punctuation-stripped terms of `text`.
pub fn terms(text: &str) -> Vec<String> {
    TERM_ANALYZER.words(text)
}

/// Punctuation-stripped words of `text` with their original casing.
pub fn words(text: &str) -> Vec<String> {
    WORD_ANALYZER.words(text)
}

/// Remove sentence punctuation from a single word, keeping its casing.
pub fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| !SENTENCE_PUNCTUATION.contains(c))
        .collect()
}

/// Normalize a single word the way the term analyzer would.
pub fn normalize(word: &str) -> String {
    strip_punctuation(word).to_lowercase()
}
