//! Engine configuration.
//!
//! # Examples
//!
//! ```
//! use textio::config::{TextioConfig, required_platforms};
//!
//! let config = TextioConfig::default();
//! assert_eq!(config.chunk_size, 6);
//! assert_eq!(config.separator(4), "; ");
//!
//! assert_eq!(required_platforms(12, 6), 2);
//! assert_eq!(required_platforms(0, 6), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coverage::DEFAULT_MAX_SENTENCES;
use crate::error::{Result, TextioError};

/// Tunables for chunking, planning and message validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextioConfig {
    /// Words per chunk when the caller does not choose one.
    pub chunk_size: usize,

    /// Largest accepted chunk size.
    pub max_chunk_size: usize,

    /// Cap on sentences produced for one chunk.
    pub max_sentences_per_chunk: usize,

    /// Longest accepted message, in characters.
    pub max_message_chars: usize,

    /// Sentence separators, rotated per chunk.
    pub separators: Vec<String>,
}

impl Default for TextioConfig {
    fn default() -> Self {
        Self {
            chunk_size: 6,
            max_chunk_size: 10,
            max_sentences_per_chunk: DEFAULT_MAX_SENTENCES,
            max_message_chars: 100,
            separators: vec![". ".to_string(), "; ".to_string(), ", ".to_string()],
        }
    }
}

impl TextioConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TextioConfig = serde_json::from_str(json)
            .map_err(|e| TextioError::config(format!("Failed to parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextioError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Check that every size is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(TextioError::config("max_chunk_size must be at least 1"));
        }
        if self.chunk_size == 0 || self.chunk_size > self.max_chunk_size {
            return Err(TextioError::config(format!(
                "chunk_size must be between 1 and {}, got {}",
                self.max_chunk_size, self.chunk_size
            )));
        }
        if self.max_sentences_per_chunk == 0 {
            return Err(TextioError::config(
                "max_sentences_per_chunk must be at least 1",
            ));
        }
        if self.max_message_chars == 0 {
            return Err(TextioError::config("max_message_chars must be at least 1"));
        }
        if self.separators.is_empty() {
            return Err(TextioError::config("separators must not be empty"));
        }
        Ok(())
    }

    /// Separator used to join the sentences of chunk `chunk_index`.
    pub fn separator(&self, chunk_index: usize) -> &str {
        match self.separators.len() {
            0 => " ",
            n => &self.separators[chunk_index % n],
        }
    }
}

/// Number of platforms needed to send `word_count` words in chunks of
/// `chunk_size`; never less than one.
pub fn required_platforms(word_count: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 1;
    }
    word_count.div_ceil(chunk_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TextioConfig::default();
        assert_eq!(config.chunk_size, 6);
        assert_eq!(config.max_chunk_size, 10);
        assert_eq!(config.max_sentences_per_chunk, 4);
        assert_eq!(config.max_message_chars, 100);
        assert_eq!(config.separators, vec![". ", "; ", ", "]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_separator_rotation() {
        let config = TextioConfig::default();
        let seps: Vec<&str> = (0..4).map(|i| config.separator(i)).collect();
        assert_eq!(seps, vec![". ", "; ", ", ", ". "]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TextioConfig::from_json_str(r#"{"max_sentences_per_chunk": 8}"#).unwrap();
        assert_eq!(config.max_sentences_per_chunk, 8);
        assert_eq!(config.chunk_size, 6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = TextioConfig {
            chunk_size: 11,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TextioError::Config(_))));

        let config = TextioConfig {
            separators: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(TextioConfig::from_json_str(r#"{"max_sentences_per_chunk": 0}"#).is_err());
        assert!(TextioConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_required_platforms() {
        assert_eq!(required_platforms(11, 6), 2);
        assert_eq!(required_platforms(12, 6), 2);
        assert_eq!(required_platforms(13, 6), 3);
        assert_eq!(required_platforms(3, 10), 1);
        assert_eq!(required_platforms(0, 6), 1);
        assert_eq!(required_platforms(5, 0), 1);
    }
}
