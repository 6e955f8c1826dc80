//! # Textio
//!
//! Cover a list of words with as few example sentences as possible.
//!
//! ## Features
//!
//! - Inverted index over a seed corpus of example sentences
//! - Greedy set-cover planning with deterministic tie-breaking
//! - Rule-based sentence rewriting (synonyms, antonyms, contractions, proper nouns)
//! - Filler sentences for words nothing can cover
//! - Chunking of long messages across output platforms

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod platform;
pub mod transformer;

pub use engine::{ChunkResult, RunReport, Textio};
pub use error::{Result, TextioError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
