//! Chunking and orchestration.
//!
//! [`Textio`] owns the immutable corpus index, catalog and configuration. A run
//! splits the message into words, cuts the words into fixed-size chunks, plans
//! every chunk on its own and assembles the per-platform results together with
//! a flat decision log.
//!
//! # Examples
//!
//! ```
//! use textio::Textio;
//!
//! let engine = Textio::builtin();
//! let report = engine.run("Man, I am not sure", 6, &[]).unwrap();
//!
//! assert_eq!(report.words, vec!["Man", "I", "am", "not", "sure"]);
//! assert_eq!(report.chunks.len(), 1);
//! assert_eq!(report.chunks[0].platform.id, "whatsapp");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::words;
use crate::catalog::TransformationCatalog;
use crate::config::{TextioConfig, required_platforms};
use crate::corpus::{Corpus, CorpusIndex};
use crate::coverage::{CoveragePlan, CoveragePlanner, CoverageResult};
use crate::error::{Result, TextioError};
use crate::platform::Platform;
use crate::transformer::TransformOutcome;

/// Header separating chunk summaries from planner decisions in the log.
pub const TRANSFORMATIONS_HEADER: &str = "=== TRANSFORMATIONS ===";

/// Output for one chunk of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkResult {
    /// Zero-based chunk position.
    pub index: usize,
    /// Platform the chunk is sent to.
    pub platform: Platform,
    /// Words assigned to this chunk, as typed.
    pub assigned: Vec<String>,
    /// Sentences joined with the chunk's separator.
    pub text: String,
    /// Words covered by some sentence.
    pub covered: Vec<String>,
    /// Words dropped by the sentence cap.
    pub truncated: Vec<String>,
    /// Number of sentences produced.
    pub sentence_count: usize,
    /// Number of sentences that were rewritten.
    pub transformed_count: usize,
    /// Human-readable descriptions of every applied rewrite.
    pub transformations: Vec<String>,
    /// The individual sentences.
    pub results: Vec<CoverageResult>,
}

impl ChunkResult {
    fn new(
        index: usize,
        platform: Platform,
        assigned: Vec<String>,
        plan: &CoveragePlan,
        separator: &str,
    ) -> Self {
        ChunkResult {
            index,
            platform,
            text: plan.join(separator),
            covered: plan.covered(),
            truncated: plan.truncated.clone(),
            sentence_count: plan.results.len(),
            transformed_count: plan.transformed_count(),
            transformations: plan
                .transformations()
                .iter()
                .map(|t| t.to_string())
                .collect(),
            results: plan.results.clone(),
            assigned,
        }
    }

    /// The summary line recorded in the run log.
    pub fn summary(&self) -> String {
        format!(
            "Result: {}/{} covered, {} transformed",
            self.covered.len(),
            self.assigned.len(),
            self.transformed_count
        )
    }
}

/// Output of one [`Textio::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Every word parsed from the message, as typed.
    pub words: Vec<String>,
    /// Number of platforms needed to send every chunk.
    pub platforms_required: usize,
    /// One result per chunk, in message order.
    pub chunks: Vec<ChunkResult>,
    /// Flat decision log.
    pub log: Vec<String>,
}

impl RunReport {
    /// Total number of covered words across chunks.
    pub fn covered_count(&self) -> usize {
        self.chunks.iter().map(|c| c.covered.len()).sum()
    }

    /// Every word dropped by the sentence cap, in chunk order.
    pub fn truncated(&self) -> Vec<String> {
        self.chunks
            .iter()
            .flat_map(|c| c.truncated.iter().cloned())
            .collect()
    }
}

/// The sentence coverage engine.
#[derive(Debug, Clone)]
pub struct Textio {
    config: TextioConfig,
    corpus: Corpus,
    index: Arc<CorpusIndex>,
    catalog: Arc<TransformationCatalog>,
    planner: CoveragePlanner,
}

impl Textio {
    /// Create an engine over a corpus and catalog.
    pub fn new(
        corpus: Corpus,
        catalog: TransformationCatalog,
        config: TextioConfig,
    ) -> Result<Self> {
        config.validate()?;
        if corpus.sentence_count() == 0 {
            return Err(TextioError::corpus("Corpus has no sentences"));
        }

        Ok(Self::assemble(corpus, catalog, config))
    }

    /// Engine over the built-in corpus and catalog with the default configuration.
    pub fn builtin() -> Self {
        Self::assemble(
            Corpus::builtin(),
            TransformationCatalog::builtin(),
            TextioConfig::default(),
        )
    }

    fn assemble(corpus: Corpus, catalog: TransformationCatalog, config: TextioConfig) -> Self {
        let index = Arc::new(CorpusIndex::build(&corpus));
        let catalog = Arc::new(catalog);
        let planner = CoveragePlanner::new(Arc::clone(&index), Arc::clone(&catalog))
            .with_max_sentences(config.max_sentences_per_chunk);

        Textio {
            config,
            corpus,
            index,
            catalog,
            planner,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TextioConfig {
        &self.config
    }

    /// The corpus the index was built from.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The corpus index.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The transformation catalog.
    pub fn catalog(&self) -> &TransformationCatalog {
        &self.catalog
    }

    /// The coverage planner.
    pub fn planner(&self) -> &CoveragePlanner {
        &self.planner
    }

    /// Cover one list of words, without chunking.
    ///
    /// Targets go through the same word analyzer as [`Self::run`], so `"Man,"`
    /// is planned as `"Man"`. A target that is nothing but punctuation is kept
    /// as typed and comes back in [`CoveragePlan::truncated`].
    pub fn plan<S: AsRef<str>>(&self, targets: &[S]) -> CoveragePlan {
        let targets: Vec<String> = targets
            .iter()
            .flat_map(|target| {
                let target = target.as_ref();
                let analyzed = words(target);
                if analyzed.is_empty() {
                    vec![target.to_string()]
                } else {
                    analyzed
                }
            })
            .collect();

        self.planner.plan(&targets)
    }

    /// Rewrite one sentence so it contains `target`.
    pub fn transform(&self, sentence: &str, target: &str) -> TransformOutcome {
        self.planner.transformer().transform(sentence, target)
    }

    /// Validate a run request and parse the message into words.
    fn prepare(&self, message: &str, chunk_size: usize) -> Result<Vec<String>> {
        let chars = message.chars().count();
        if chars > self.config.max_message_chars {
            return Err(TextioError::invalid_argument(format!(
                "Message is {chars} characters long, the limit is {}",
                self.config.max_message_chars
            )));
        }
        if chunk_size == 0 || chunk_size > self.config.max_chunk_size {
            return Err(TextioError::invalid_argument(format!(
                "Chunk size must be between 1 and {}, got {chunk_size}",
                self.config.max_chunk_size
            )));
        }

        let words = words(message);
        if words.is_empty() {
            return Err(TextioError::invalid_argument("Message contains no words"));
        }
        Ok(words)
    }

    /// Split `message` into chunks of `chunk_size` words and cover each chunk.
    ///
    /// Chunk `i` goes to `platform_order[i]` when given, otherwise to the
    /// built-in platform list cycled from the start.
    pub fn run(
        &self,
        message: &str,
        chunk_size: usize,
        platform_order: &[Platform],
    ) -> Result<RunReport> {
        let words = self.prepare(message, chunk_size)?;

        let platforms_required = required_platforms(words.len(), chunk_size);
        if !platform_order.is_empty() && platform_order.len() < platforms_required {
            log::warn!(
                "{} chunks but only {} platforms selected, cycling the built-in list",
                platforms_required,
                platform_order.len()
            );
        }

        let mut log = vec![format!("Processing: {}", words.join(", "))];
        let mut decisions = Vec::new();
        let mut chunks = Vec::with_capacity(words.len().div_ceil(chunk_size));

        for (index, assigned) in words.chunks(chunk_size).enumerate() {
            let platform = Platform::for_chunk(index, platform_order);
            let plan = self.planner.plan(assigned);
            let chunk = ChunkResult::new(
                index,
                platform,
                assigned.to_vec(),
                &plan,
                self.config.separator(index),
            );

            log.push(format!("Platform {}: [{}]", index + 1, assigned.join(", ")));
            log.push(chunk.summary());
            log::info!("{} {}: {}", platform.name, index + 1, chunk.summary());

            decisions.extend(plan.log);
            chunks.push(chunk);
        }

        log.push(TRANSFORMATIONS_HEADER.to_string());
        log.extend(decisions);

        Ok(RunReport {
            words,
            platforms_required,
            chunks,
            log,
        })
    }

    /// Run several independent messages in parallel.
    ///
    /// Results are returned in input order, one per message.
    pub fn run_many<S: AsRef<str> + Sync>(
        &self,
        messages: &[S],
        chunk_size: usize,
        platform_order: &[Platform],
    ) -> Vec<Result<RunReport>> {
        messages
            .par_iter()
            .map(|message| self.run(message.as_ref(), chunk_size, platform_order))
            .collect()
    }
}

impl Default for Textio {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::SeedEntry;

    const SCENARIO: &str = "Man, I am not sure if this a cool idea or not";

    #[test]
    fn test_scenario_chunks() {
        let report = Textio::builtin().run(SCENARIO, 6, &[]).unwrap();
        assert_eq!(report.words.len(), 12);
        assert_eq!(report.words[0], "Man");
        assert_eq!(report.chunks.len(), 2);

        let first = &report.chunks[0];
        assert_eq!(first.platform.id, "whatsapp");
        assert_eq!(first.assigned, vec!["Man", "I", "am", "not", "sure", "if"]);
        assert_eq!(first.sentence_count, 4);
        assert_eq!(first.transformed_count, 0);
        assert_eq!(first.truncated, vec!["if"]);
        let texts: Vec<&str> = first.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "I am excited about this",
                "Man is really helpful",
                "This is not correct",
                "I'm sure about this",
            ]
        );
        assert!(first.text.starts_with("I am excited about this. Man is really helpful. "));

        let second = &report.chunks[1];
        assert_eq!(second.platform.id, "telegram");
        assert_eq!(second.covered.len(), 6);
        assert_eq!(
            second.text,
            "this is a good idea; The weather is cool; This or that works; This is not correct"
        );
    }

    #[test]
    fn test_scenario_log() {
        let report = Textio::builtin().run(SCENARIO, 6, &[]).unwrap();
        assert_eq!(
            report.log[0],
            "Processing: Man, I, am, not, sure, if, this, a, cool, idea, or, not"
        );
        assert_eq!(report.log[1], "Platform 1: [Man, I, am, not, sure, if]");
        assert_eq!(report.log[2], "Result: 5/6 covered, 0 transformed");
        assert_eq!(report.log[3], "Platform 2: [this, a, cool, idea, or, not]");
        assert_eq!(report.log[4], "Result: 6/6 covered, 0 transformed");
        assert_eq!(report.log[5], TRANSFORMATIONS_HEADER);
        assert!(report.log[6].starts_with("TRUNCATED:"));
        assert_eq!(report.log.len(), 7);
    }

    #[test]
    fn test_larger_cap_covers_first_chunk() {
        let config = TextioConfig {
            max_sentences_per_chunk: 6,
            ..Default::default()
        };
        let engine =
            Textio::new(Corpus::builtin(), TransformationCatalog::builtin(), config).unwrap();
        let report = engine.run(SCENARIO, 6, &[]).unwrap();
        assert_eq!(report.chunks[0].covered.len(), 6);
        assert!(report.truncated().is_empty());
        assert_eq!(report.covered_count(), 12);
    }

    #[test]
    fn test_explicit_platform_order() {
        let order = Platform::parse_order(&["discord"]).unwrap();
        let report = Textio::builtin().run(SCENARIO, 4, &order).unwrap();
        let ids: Vec<&str> = report.chunks.iter().map(|c| c.platform.id).collect();
        assert_eq!(ids, vec!["discord", "telegram", "linkedin"]);
        assert_eq!(report.chunks[2].assigned.len(), 4);
        assert_eq!(report.platforms_required, 3);
    }

    #[test]
    fn test_last_chunk_may_be_shorter() {
        let report = Textio::builtin().run("Man I am not sure", 3, &[]).unwrap();
        assert_eq!(report.chunks.len(), 2);
        assert_eq!(report.chunks[1].assigned, vec!["not", "sure"]);
    }

    #[test]
    fn test_rejects_bad_input() {
        let engine = Textio::builtin();
        assert!(matches!(engine.run("", 6, &[]), Err(TextioError::InvalidArgument(_))));
        assert!(matches!(engine.run(" ,. ", 6, &[]), Err(TextioError::InvalidArgument(_))));
        assert!(matches!(engine.run("hello", 0, &[]), Err(TextioError::InvalidArgument(_))));
        assert!(matches!(engine.run("hello", 11, &[]), Err(TextioError::InvalidArgument(_))));

        let long = "word ".repeat(30);
        assert!(matches!(engine.run(&long, 6, &[]), Err(TextioError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_empty_corpus() {
        let corpus = Corpus::new(vec![SeedEntry::new("x", Vec::new())]);
        let result = Textio::new(corpus, TransformationCatalog::builtin(), TextioConfig::default());
        assert!(matches!(result, Err(TextioError::Corpus(_))));
    }

    #[test]
    fn test_run_many_keeps_input_order() {
        let engine = Textio::builtin();
        let reports = engine.run_many(&["xylophone", "", "Man"], 6, &[]);
        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports[0].as_ref().unwrap().chunks[0].text,
            "I wanted to mention xylophone today"
        );
        assert!(reports[1].is_err());
        assert_eq!(reports[2].as_ref().unwrap().chunks[0].text, "Man is really helpful");
    }

    #[test]
    fn test_platforms_required() {
        let engine = Textio::builtin();
        assert_eq!(engine.run(SCENARIO, 6, &[]).unwrap().platforms_required, 2);
        assert_eq!(engine.run(SCENARIO, 5, &[]).unwrap().platforms_required, 3);
        assert_eq!(engine.run("Man", 6, &[]).unwrap().platforms_required, 1);
    }

    #[test]
    fn test_plan_analyzes_targets() {
        let engine = Textio::builtin();

        let plan = engine.plan(&["Man,", "walked"]);
        assert_eq!(plan.results[0].text, "The Man walked quickly");
        assert_eq!(plan.results[0].covered, vec!["Man", "walked"]);

        let plan = engine.plan(&["?", "xylophone"]);
        assert_eq!(plan.results[0].covered, vec!["xylophone"]);
        assert_eq!(plan.truncated, vec!["?"]);
    }

    #[test]
    fn test_transform_and_plan_passthrough() {
        let engine = Textio::default();
        assert_eq!(
            engine.transform("This is a good idea", "great").sentence,
            "This is a great idea"
        );
        assert_eq!(engine.plan(&["xylophone".to_string()]).results.len(), 1);
    }
}
