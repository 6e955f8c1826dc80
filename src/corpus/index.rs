//! Inverted index from term to the corpus sentences that contain it.
//!
//! Every sentence is registered under every term it contains, not only under
//! the seed word it was written for, so `"Man is really helpful"` can be found
//! through `man`, `is`, `really` and `helpful`.
//!
//! # Examples
//!
//! ```
//! use textio::corpus::{Corpus, CorpusIndex};
//!
//! let index = CorpusIndex::build(&Corpus::builtin());
//! let entries = index.lookup("helpful");
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].sentence, "Man is really helpful");
//! assert_eq!(entries[0].tokens, vec!["man", "is", "really", "helpful"]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::terms;
use crate::corpus::seed::Corpus;

/// A corpus sentence together with its analyzed terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The sentence exactly as written in the corpus.
    pub sentence: String,
    /// Lowercased, punctuation-stripped terms of `sentence`.
    pub tokens: Vec<String>,
}

impl IndexEntry {
    /// Analyze `sentence` into an entry.
    pub fn new<S: Into<String>>(sentence: S) -> Self {
        let sentence = sentence.into();
        let tokens = terms(&sentence);
        IndexEntry { sentence, tokens }
    }

    /// Whether this entry's sentence contains `term` as a whole word.
    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }
}

/// Term → sentences index.
///
/// Terms keep the order in which they were first seen while building, and the
/// postings of a term keep corpus order. Both orders are part of the
/// tie-breaking contract of the coverage planner.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    /// Terms in first-seen order.
    terms: Vec<String>,
    /// Postings, parallel to `terms`.
    postings: Vec<Vec<IndexEntry>>,
    /// Term → slot in `terms`/`postings`.
    slots: AHashMap<String, usize>,
}

impl CorpusIndex {
    /// Build the index from a corpus.
    pub fn build(corpus: &Corpus) -> Self {
        let mut index = CorpusIndex::default();

        for seed in corpus.entries() {
            for sentence in &seed.sentences {
                let entry = IndexEntry::new(sentence.as_str());
                // A term repeated inside one sentence registers it twice; harmless.
                for term in &entry.tokens {
                    index.insert(term, entry.clone());
                }
            }
        }

        log::debug!(
            "indexed {} sentences under {} terms",
            corpus.sentence_count(),
            index.terms.len()
        );
        index
    }

    fn insert(&mut self, term: &str, entry: IndexEntry) {
        let slot = match self.slots.get(term) {
            Some(&slot) => slot,
            None => {
                let slot = self.terms.len();
                self.terms.push(term.to_string());
                self.postings.push(Vec::new());
                self.slots.insert(term.to_string(), slot);
                slot
            }
        };
        self.postings[slot].push(entry);
    }

    /// Entries registered under `term` (already lowercased), in corpus order.
    pub fn lookup(&self, term: &str) -> &[IndexEntry] {
        match self.slots.get(term) {
            Some(&slot) => &self.postings[slot],
            None => &[],
        }
    }

    /// Whether any sentence contains `term`.
    pub fn contains_term(&self, term: &str) -> bool {
        self.slots.contains_key(term)
    }

    /// Terms in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_str())
    }

    /// Every entry of every term, flattened in term order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.postings.iter().flatten()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of postings across all terms.
    pub fn posting_count(&self) -> usize {
        self.postings.iter().map(|p| p.len()).sum()
    }
}

impl PartialEq for CorpusIndex {
    fn eq(&self, other: &Self) -> bool {
        // slots are derived from terms
        self.terms == other.terms && self.postings == other.postings
    }
}
