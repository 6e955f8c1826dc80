//! Greedy coverage planner.
//!
//! Each round picks the single sentence covering the most still-uncovered
//! target words:
//!
//! 1. exact pass: corpus sentences reached through the index;
//! 2. transformation pass (only when the exact pass covers nothing): every
//!    corpus sentence rewritten for every remaining word;
//! 3. when neither pass covers anything, one filler sentence takes all
//!    remaining words.
//!
//! Ties keep the first candidate found: remaining words in input order on the
//! outside, index order on the inside. Planning stops after
//! `max_sentences` results; words still uncovered at that point are reported in
//! [`CoveragePlan::truncated`], together with targets that are nothing but
//! punctuation.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use textio::catalog::TransformationCatalog;
//! use textio::corpus::{Corpus, CorpusIndex};
//! use textio::coverage::CoveragePlanner;
//!
//! let planner = CoveragePlanner::new(
//!     Arc::new(CorpusIndex::build(&Corpus::builtin())),
//!     Arc::new(TransformationCatalog::builtin()),
//! );
//! let plan = planner.plan(&["I".to_string(), "am".to_string()]);
//!
//! assert_eq!(plan.results.len(), 1);
//! assert_eq!(plan.results[0].text, "I am excited about this");
//! ```

use std::sync::Arc;

use crate::analysis::{normalize, replace_word, strip_punctuation, terms};
use crate::catalog::TransformationCatalog;
use crate::corpus::CorpusIndex;
use crate::coverage::result::{CoveragePlan, CoverageResult};
use crate::transformer::{SentenceTransformer, Transformation};

/// Default cap on sentences produced for one word list.
pub const DEFAULT_MAX_SENTENCES: usize = 4;

/// Best candidate of one planning round.
#[derive(Debug)]
struct Candidate {
    text: String,
    transformations: Vec<Transformation>,
    transformed: bool,
    covered_terms: Vec<String>,
}

/// Greedy set-cover planner over a corpus index.
#[derive(Debug, Clone)]
pub struct CoveragePlanner {
    index: Arc<CorpusIndex>,
    transformer: SentenceTransformer,
    max_sentences: usize,
}

impl CoveragePlanner {
    /// Create a planner with the default sentence cap.
    pub fn new(index: Arc<CorpusIndex>, catalog: Arc<TransformationCatalog>) -> Self {
        CoveragePlanner {
            index,
            transformer: SentenceTransformer::new(catalog),
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }

    /// Set the cap on sentences per plan (at least 1).
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }

    /// The sentence cap.
    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// The index searched by this planner.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The transformer used by the transformation pass.
    pub fn transformer(&self) -> &SentenceTransformer {
        &self.transformer
    }

    /// Cover `targets` with as few sentences as the greedy strategy finds.
    pub fn plan(&self, targets: &[String]) -> CoveragePlan {
        let mut plan = CoveragePlan::default();
        let (mut remaining, blank): (Vec<String>, Vec<String>) = targets
            .iter()
            .cloned()
            .partition(|word| !normalize(word).is_empty());

        if !blank.is_empty() {
            log::warn!("nothing to match in [{}], skipping", blank.join(", "));
            plan.log
                .push(format!("SKIPPED: [{}] have nothing to match", blank.join(", ")));
            plan.truncated = blank;
        }

        while !remaining.is_empty() && plan.results.len() < self.max_sentences {
            let wanted = distinct_terms(&remaining);

            let best = self
                .exact_pass(&remaining, &wanted)
                .or_else(|| self.transformation_pass(&remaining, &wanted));

            let Some(best) = best else {
                log::warn!("no sentence covers [{}], using filler", remaining.join(", "));
                plan.log
                    .push(format!("FALLBACK: no sentence for [{}]", remaining.join(", ")));
                plan.results
                    .push(CoverageResult::fallback(std::mem::take(&mut remaining)));
                break;
            };

            let (covered, rest): (Vec<String>, Vec<String>) = remaining
                .into_iter()
                .partition(|word| best.covered_terms.contains(&normalize(word)));
            remaining = rest;

            let text = restore_casing(&best.text, &covered);
            log::debug!(
                "round {}: \"{}\" covers [{}]",
                plan.results.len() + 1,
                text,
                covered.join(", ")
            );
            plan.log
                .extend(best.transformations.iter().map(Transformation::log_line));
            plan.results.push(CoverageResult {
                text,
                covered,
                transformations: best.transformations,
                transformed: best.transformed,
                fallback: false,
            });
        }

        if !remaining.is_empty() {
            log::warn!(
                "sentence cap of {} reached, dropping [{}]",
                self.max_sentences,
                remaining.join(", ")
            );
            plan.log.push(format!(
                "TRUNCATED: cap of {} sentences reached, [{}] not covered",
                self.max_sentences,
                remaining.join(", ")
            ));
            plan.truncated.extend(remaining);
        }

        plan
    }

    fn exact_pass(&self, remaining: &[String], wanted: &[String]) -> Option<Candidate> {
        let mut best: Option<(usize, Candidate)> = None;

        for word in remaining {
            for entry in self.index.lookup(&normalize(word)) {
                let covered = covered_terms(&entry.tokens, wanted);
                if covered.len() > best.as_ref().map_or(0, |(count, _)| *count) {
                    best = Some((
                        covered.len(),
                        Candidate {
                            text: entry.sentence.clone(),
                            transformations: Vec::new(),
                            transformed: false,
                            covered_terms: covered,
                        },
                    ));
                }
            }
        }

        best.map(|(_, candidate)| candidate)
    }

    fn transformation_pass(&self, remaining: &[String], wanted: &[String]) -> Option<Candidate> {
        let mut best: Option<(usize, Candidate)> = None;

        for word in remaining {
            for entry in self.index.entries() {
                let outcome = self.transformer.transform(&entry.sentence, word);
                if !outcome.success {
                    continue;
                }

                let covered = covered_terms(&terms(&outcome.sentence), wanted);
                if covered.len() > best.as_ref().map_or(0, |(count, _)| *count) {
                    best = Some((
                        covered.len(),
                        Candidate {
                            transformed: outcome.is_transformed(),
                            text: outcome.sentence,
                            transformations: outcome.transformations,
                            covered_terms: covered,
                        },
                    ));
                }
            }
        }

        best.map(|(_, candidate)| candidate)
    }
}

/// Lowercased terms of `words`, first occurrence only.
fn distinct_terms(words: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let term = normalize(word);
        if !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen
}

/// The wanted terms present in `tokens`.
fn covered_terms(tokens: &[String], wanted: &[String]) -> Vec<String> {
    wanted
        .iter()
        .filter(|term| tokens.contains(term))
        .cloned()
        .collect()
}

/// Rewrite every covered word in the casing it was typed.
///
/// When a word was typed twice with different casing, the first spelling wins.
/// Punctuation typed around the word is not carried into the sentence.
fn restore_casing(text: &str, covered: &[String]) -> String {
    let mut restored = text.to_string();
    let mut done: Vec<String> = Vec::new();

    for word in covered {
        let term = normalize(word);
        if done.contains(&term) {
            continue;
        }
        if let Some(rewritten) = replace_word(&restored, &term, &strip_punctuation(word)) {
            restored = rewritten;
        }
        done.push(term);
    }

    restored
}
