//! Analyzers: tokenizer plus filter chains.

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod word;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
