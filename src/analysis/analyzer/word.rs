//! Word analyzer used for messages, corpus sentences and matching.
//!
//! Splits on plain spaces, removes sentence punctuation (`. , ! ?`) and drops
//! the tokens left empty. The lowercased variant produces the *terms* used for
//! indexing and coverage; the case-preserving variant produces the words of a
//! user message exactly as typed.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, PunctuationFilter, RemoveEmptyFilter};
use crate::analysis::tokenizer::RegexTokenizer;

/// Space-separated word analyzer.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
    lowercase: bool,
}

impl WordAnalyzer {
    /// Create an analyzer that keeps the original casing.
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("words");

        WordAnalyzer {
            inner,
            lowercase: false,
        }
    }

    /// Create an analyzer that lowercases every token.
    pub fn lowercased() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("terms");

        WordAnalyzer {
            inner,
            lowercase: true,
        }
    }

    /// Whether this analyzer lowercases its output.
    pub fn is_lowercased(&self) -> bool {
        self.lowercase
    }

    /// Analyze `text` and keep only the token texts.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        if self.lowercase { "terms" } else { "words" }
    }
}
