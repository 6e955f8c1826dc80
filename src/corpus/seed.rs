//! Seed corpus: example sentences grouped by the word they were written for.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextioError};

/// A seed word and the example sentences written for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// The seed word.
    pub word: String,
    /// Example sentences, in declaration order.
    pub sentences: Vec<String>,
}

impl SeedEntry {
    /// Create a seed entry.
    pub fn new<S: Into<String>>(word: S, sentences: Vec<String>) -> Self {
        SeedEntry {
            word: word.into(),
            sentences,
        }
    }
}

/// The full sentence corpus, in declaration order.
///
/// Order matters: it decides which sentence wins a coverage tie.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    entries: Vec<SeedEntry>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "man",
        &["Man is really helpful", "The man walked quickly", "Every man needs respect"],
    ),
    (
        "i",
        &["I hope you understand", "I think this works", "I wanted to tell you"],
    ),
    (
        "am",
        &["I am excited about this", "Am I doing this right", "I am here for you"],
    ),
    (
        "not",
        &["This is not correct", "I'm not ready yet", "Not everything works perfectly"],
    ),
    (
        "sure",
        &["I'm sure about this", "Are you sure today", "Sure thing buddy"],
    ),
    ("if", &["If this works well", "What if we try", "If only we knew"]),
    (
        "this",
        &["This approach works well", "I like this idea", "This seems right"],
    ),
    (
        "a",
        &["This is a good idea", "I need a quick answer", "A simple solution works"],
    ),
    (
        "cool",
        &["The weather is cool", "That's really cool stuff", "Cool idea for sure"],
    ),
    (
        "idea",
        &["This is a good idea", "Great idea for today", "The idea works well"],
    ),
    ("or", &["This or that works", "Red or blue color", "Now or never time"]),
];

impl Corpus {
    /// Create a corpus from seed entries.
    pub fn new(entries: Vec<SeedEntry>) -> Self {
        Corpus { entries }
    }

    /// The built-in English corpus.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(word, sentences)| {
                SeedEntry::new(*word, sentences.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Corpus { entries }
    }

    /// Parse a corpus from JSON.
    ///
    /// The JSON document is an array of `{"word": ..., "sentences": [...]}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<SeedEntry> = serde_json::from_str(json)
            .map_err(|e| TextioError::corpus(format!("Failed to parse corpus JSON: {e}")))?;

        for entry in &entries {
            if entry.word.trim().is_empty() {
                return Err(TextioError::corpus("Seed word must not be empty"));
            }
        }

        Ok(Corpus { entries })
    }

    /// Load a corpus from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextioError::corpus(format!(
                "Failed to read corpus file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Seed entries in declaration order.
    pub fn entries(&self) -> &[SeedEntry] {
        &self.entries
    }

    /// Total number of sentences, counting repeats.
    pub fn sentence_count(&self) -> usize {
        self.entries.iter().map(|e| e.sentences.len()).sum()
    }

    /// Number of seed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.len(), 11);
        assert_eq!(corpus.sentence_count(), 33);
        assert_eq!(corpus.entries()[0].word, "man");
        assert_eq!(corpus.entries()[0].sentences[0], "Man is really helpful");
        assert_eq!(corpus.entries()[10].word, "or");
    }

    #[test]
    fn test_from_json_keeps_order() {
        let corpus = Corpus::from_json_str(
            r#"[
                {"word": "zebra", "sentences": ["A zebra runs"]},
                {"word": "apple", "sentences": ["An apple falls", "Apple pie"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].word, "zebra");
        assert_eq!(corpus.entries()[1].sentences, vec!["An apple falls", "Apple pie"]);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            Corpus::from_json_str("{}"),
            Err(TextioError::Corpus(_))
        ));
        assert!(matches!(
            Corpus::from_json_str(r#"[{"word": " ", "sentences": []}]"#),
            Err(TextioError::Corpus(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(Corpus::load_from_file("/nonexistent/corpus.json").is_err());
    }
}
