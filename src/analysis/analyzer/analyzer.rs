//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer with a chain of filters:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use textio::analysis::analyzer::analyzer::Analyzer;
//! use textio::analysis::analyzer::word::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::lowercased();
//! let tokens: Vec<_> = analyzer.analyze("Man, I am here!").collect();
//!
//! assert_eq!(tokens[0].text, "man");
//! assert_eq!(tokens[3].text, "here");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis cannot fail once an analyzer has been built; construction is where
/// invalid patterns are rejected.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}
