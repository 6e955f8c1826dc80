//! Sentence corpus and its inverted index.

pub mod index;
pub mod seed;

pub use index::{CorpusIndex, IndexEntry};
pub use seed::{Corpus, SeedEntry};
