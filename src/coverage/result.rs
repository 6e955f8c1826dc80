//! Coverage results produced by the planner.

use serde::{Deserialize, Serialize};

use crate::analysis::strip_punctuation;
use crate::transformer::Transformation;

/// Text of the filler sentence for words nothing else could cover.
///
/// Sentence punctuation typed with the words is left out.
pub fn fallback_sentence(words: &[String]) -> String {
    let words: Vec<String> = words.iter().map(|w| strip_punctuation(w)).collect();
    format!("I wanted to mention {} today", words.join(" "))
}

/// One produced sentence and the target words it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Final sentence text, with covered words in the casing they were typed.
    pub text: String,
    /// Covered target words, original casing, in input order.
    pub covered: Vec<String>,
    /// Rewrites applied to the corpus sentence.
    pub transformations: Vec<Transformation>,
    /// Whether the sentence was rewritten by the transformer.
    pub transformed: bool,
    /// Whether this is the synthetic filler sentence.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl CoverageResult {
    /// The filler result covering every word in `words`.
    pub fn fallback(words: Vec<String>) -> Self {
        CoverageResult {
            text: fallback_sentence(&words),
            covered: words,
            transformations: Vec::new(),
            transformed: false,
            fallback: true,
        }
    }
}

/// Outcome of planning one list of target words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePlan {
    /// Produced sentences, in the order they were chosen.
    pub results: Vec<CoverageResult>,
    /// Decision lines: winning transformations, fallbacks, truncation.
    pub log: Vec<String>,
    /// Words left uncovered: dropped by the sentence cap, or nothing but
    /// punctuation.
    pub truncated: Vec<String>,
}

impl CoveragePlan {
    /// Every covered word across all results, in result order.
    pub fn covered(&self) -> Vec<String> {
        self.results
            .iter()
            .flat_map(|r| r.covered.iter().cloned())
            .collect()
    }

    /// Number of results produced by a rewritten sentence.
    pub fn transformed_count(&self) -> usize {
        self.results.iter().filter(|r| r.transformed).count()
    }

    /// Every transformation across all results.
    pub fn transformations(&self) -> Vec<Transformation> {
        self.results
            .iter()
            .flat_map(|r| r.transformations.iter().cloned())
            .collect()
    }

    /// Whether the sentence cap stopped planning before every word was covered.
    pub fn is_truncated(&self) -> bool {
        !self.truncated.is_empty()
    }

    /// Whether a filler sentence had to be used.
    pub fn used_fallback(&self) -> bool {
        self.results.iter().any(|r| r.fallback)
    }

    /// Sentence texts joined with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_result() {
        let result = CoverageResult::fallback(vec!["xylophone".to_string(), "zither".to_string()]);
        assert_eq!(result.text, "I wanted to mention xylophone zither today");
        assert_eq!(result.covered, vec!["xylophone", "zither"]);
        assert!(result.fallback);
        assert!(!result.transformed);
    }

    #[test]
    fn test_fallback_flag_serialization() {
        let mut result = CoverageResult::fallback(vec!["x".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fallback"], true);

        result.fallback = false;
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("fallback").is_none());
    }

    #[test]
    fn test_plan_aggregates() {
        let plan = CoveragePlan {
            results: vec![
                CoverageResult {
                    text: "One".to_string(),
                    covered: vec!["one".to_string()],
                    transformations: Vec::new(),
                    transformed: false,
                    fallback: false,
                },
                CoverageResult::fallback(vec!["two".to_string()]),
            ],
            log: Vec::new(),
            truncated: Vec::new(),
        };

        assert_eq!(plan.covered(), vec!["one", "two"]);
        assert_eq!(plan.join(". "), "One. I wanted to mention two today");
        assert_eq!(plan.transformed_count(), 0);
        assert!(plan.used_fallback());
        assert!(!plan.is_truncated());
    }
}
