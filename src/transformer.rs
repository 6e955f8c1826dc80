//! Sentence transformer: make a sentence contain a wanted word.
//!
//! Strategies are tried in strict priority order and the first one that applies
//! wins:
//!
//! 1. the word is already there: only its casing is adjusted;
//! 2. the word is capitalized (proper-noun-like): it replaces the leading word,
//!    or is put in front as an introduction when there is no leading word;
//! 3. a catalog rule lets the word replace a source word of the sentence
//!    (synonyms, then antonyms, then contractions, each in declaration order);
//! 4. nothing applies: the sentence is returned unchanged with `success: false`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use textio::catalog::TransformationCatalog;
//! use textio::transformer::SentenceTransformer;
//!
//! let transformer = SentenceTransformer::new(Arc::new(TransformationCatalog::builtin()));
//! let outcome = transformer.transform("This is a good idea", "great");
//!
//! assert!(outcome.success);
//! assert_eq!(outcome.sentence, "This is a great idea");
//! assert_eq!(outcome.transformations[0].to_string(), "synonym: good → great");
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::rewrite::contains_phrase;
use crate::analysis::{normalize, replace_phrase, replace_word, strip_punctuation, terms};
use crate::catalog::{RuleCategory, TransformationCatalog};

static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(\s+)").expect("leading word pattern should be valid"));

/// One rewrite applied to a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformation {
    /// A catalog rule replaced `from` with `to`.
    Substitution {
        category: RuleCategory,
        from: String,
        to: String,
    },
    /// The word replaced the sentence's leading word.
    Positioned { word: String },
    /// The word was prepended as an introduction.
    Intro { word: String },
}

impl Transformation {
    /// The decision-log line recorded when this transformation is chosen.
    pub fn log_line(&self) -> String {
        match self {
            Transformation::Substitution { category, from, to } => {
                format!("{}: {from} → {to}", category.as_str().to_uppercase())
            }
            Transformation::Positioned { word } => {
                format!("POSITION: placed \"{word}\" at sentence start")
            }
            Transformation::Intro { word } => {
                format!("INTRO: added \"{word}\" as introduction")
            }
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Substitution { category, from, to } => {
                write!(f, "{category}: {from} → {to}")
            }
            Transformation::Positioned { word } => write!(f, "positioned: {word} at start"),
            Transformation::Intro { word } => write!(f, "intro: {word} added"),
        }
    }
}

/// Result of [`SentenceTransformer::transform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOutcome {
    /// The rewritten sentence, or the input when nothing applied.
    pub sentence: String,
    /// Rewrites applied; empty for a pure casing adjustment.
    pub transformations: Vec<Transformation>,
    /// Whether the sentence now contains the target word.
    pub success: bool,
}

impl TransformOutcome {
    fn unchanged(sentence: &str) -> Self {
        TransformOutcome {
            sentence: sentence.to_string(),
            transformations: Vec::new(),
            success: false,
        }
    }

    fn rewritten(sentence: String, transformation: Option<Transformation>) -> Self {
        TransformOutcome {
            sentence,
            transformations: transformation.into_iter().collect(),
            success: true,
        }
    }

    /// Whether a rewrite (not just a casing fix) was applied.
    pub fn is_transformed(&self) -> bool {
        !self.transformations.is_empty()
    }
}

/// Rule-based sentence rewriter backed by a [`TransformationCatalog`].
#[derive(Debug, Clone)]
pub struct SentenceTransformer {
    catalog: Arc<TransformationCatalog>,
}

impl SentenceTransformer {
    /// Create a transformer over a catalog.
    pub fn new(catalog: Arc<TransformationCatalog>) -> Self {
        SentenceTransformer { catalog }
    }

    /// The catalog consulted by this transformer.
    pub fn catalog(&self) -> &TransformationCatalog {
        &self.catalog
    }

    /// Try to make `sentence` contain `target` as a whole word.
    ///
    /// Sentence punctuation typed around `target` is ignored.
    pub fn transform(&self, sentence: &str, target: &str) -> TransformOutcome {
        let surface = strip_punctuation(target);
        let target = surface.as_str();
        let target_term = normalize(target);
        if target_term.is_empty() {
            return TransformOutcome::unchanged(sentence);
        }

        let sentence_terms = terms(sentence);
        if sentence_terms.contains(&target_term) {
            // Only the casing changes, which is not counted as a transformation.
            let recased = replace_word(sentence, &target_term, target)
                .unwrap_or_else(|| sentence.to_string());
            return TransformOutcome::rewritten(recased, None);
        }

        if starts_uppercase(target) {
            return Self::position(sentence, target);
        }

        self.substitute(sentence, &sentence_terms, &target_term, target)
            .unwrap_or_else(|| TransformOutcome::unchanged(sentence))
    }

    fn position(sentence: &str, target: &str) -> TransformOutcome {
        if let Some(caps) = LEADING_WORD.captures(sentence) {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let spacing = caps.get(2).map_or("", |m| m.as_str());
            let rewritten = format!("{target}{spacing}{}", &sentence[whole..]);
            return TransformOutcome::rewritten(
                rewritten,
                Some(Transformation::Positioned {
                    word: target.to_string(),
                }),
            );
        }

        let rewritten = format!("{target}, {}", lowercase_first(sentence));
        TransformOutcome::rewritten(
            rewritten,
            Some(Transformation::Intro {
                word: target.to_string(),
            }),
        )
    }

    fn substitute(
        &self,
        sentence: &str,
        sentence_terms: &[String],
        target_term: &str,
        target: &str,
    ) -> Option<TransformOutcome> {
        for category in RuleCategory::ORDER {
            if category == RuleCategory::Contraction {
                for rule in self.catalog.contractions() {
                    let phrase = rule.phrase_terms();
                    if rule.accepts(target_term) && contains_phrase(sentence_terms, &phrase) {
                        let rewritten = replace_phrase(sentence, &phrase, target)?;
                        return Some(TransformOutcome::rewritten(
                            rewritten,
                            Some(Transformation::Substitution {
                                category,
                                from: rule.phrase.clone(),
                                to: target.to_string(),
                            }),
                        ));
                    }
                }
                continue;
            }

            for rule in self.catalog.rules(category) {
                if rule.accepts(target_term) && sentence_terms.contains(&rule.source) {
                    let rewritten = replace_word(sentence, &rule.source, target)?;
                    return Some(TransformOutcome::rewritten(
                        rewritten,
                        Some(Transformation::Substitution {
                            category,
                            from: rule.source.clone(),
                            to: target.to_string(),
                        }),
                    ));
                }
            }
        }

        None
    }
}

/// Whether the first character is an uppercase letter.
///
/// Digits and symbols are not uppercase, so `42` is never positioned.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
