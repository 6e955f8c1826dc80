//! Transformation catalog: which word may stand in for which.
//!
//! Three rule tables are consulted in a fixed order (synonyms, antonyms,
//! contractions). Within a table, rules are tried in declaration order and the
//! first match wins, so the order of the tables is part of the output contract.
//!
//! # Examples
//!
//! ```
//! use textio::catalog::{RuleCategory, TransformationCatalog};
//!
//! let catalog = TransformationCatalog::builtin();
//! let rule = &catalog.rules(RuleCategory::Synonym)[0];
//!
//! assert_eq!(rule.source, "good");
//!
//! assert!(rule.accepts("great"));
//! assert!(!rule.accepts("bad"));
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{normalize, terms};
use crate::error::{Result, TextioError};

/// The kind of a substitution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Synonym,
    Antonym,
    Contraction,
}

impl RuleCategory {
    /// Categories in the order they are tried.
    pub const ORDER: [RuleCategory; 3] = [
        RuleCategory::Synonym,
        RuleCategory::Antonym,
        RuleCategory::Contraction,
    ];

    /// Lowercase name, as used in transformation descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Synonym => "synonym",
            RuleCategory::Antonym => "antonym",
            RuleCategory::Contraction => "contraction",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source word and the words allowed to replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// The word that gets replaced.
    pub source: String,
    /// Accepted replacements, in declaration order.
    pub targets: Vec<String>,
}

impl SubstitutionRule {
    /// Create a rule; words are normalized to lowercase.
    pub fn new<S: AsRef<str>>(source: &str, targets: &[S]) -> Self {
        SubstitutionRule {
            source: normalize(source),
            targets: targets.iter().map(|t| normalize(t.as_ref())).collect(),
        }
    }

    /// Whether `target` (any casing) is an accepted replacement.
    pub fn accepts(&self, target: &str) -> bool {
        let target = normalize(target);
        self.targets.iter().any(|t| *t == target)
    }
}

/// A multi-word phrase and its contracted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionRule {
    /// The expanded phrase, e.g. `do not`.
    pub phrase: String,
    /// The contracted form, e.g. `don't`.
    pub contraction: String,
}

impl ContractionRule {
    /// Create a contraction rule.
    pub fn new<S: Into<String>>(phrase: S, contraction: S) -> Self {
        ContractionRule {
            phrase: phrase.into(),
            contraction: contraction.into(),
        }
    }

    /// The phrase as analyzed terms.
    pub fn phrase_terms(&self) -> Vec<String> {
        terms(&self.phrase)
    }

    /// Whether `target` (any casing) is this rule's contraction.
    pub fn accepts(&self, target: &str) -> bool {
        normalize(target) == normalize(&self.contraction)
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDefinition {
    pub synonyms: Vec<SubstitutionRule>,
    pub antonyms: Vec<SubstitutionRule>,
    pub contractions: Vec<ContractionRule>,
}

/// Immutable rule tables, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct TransformationCatalog {
    synonyms: Vec<SubstitutionRule>,
    antonyms: Vec<SubstitutionRule>,
    contractions: Vec<ContractionRule>,
}

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("good", &["great", "nice", "fine", "well", "awesome"]),
    ("cool", &["nice", "great", "awesome", "sweet", "neat"]),
    ("idea", &["plan", "thought", "concept", "notion"]),
    ("sure", &["certain", "confident", "positive", "definite"]),
];

const BUILTIN_ANTONYMS: &[(&str, &[&str])] = &[
    ("good", &["bad", "poor", "awful", "terrible"]),
    ("cool", &["hot", "warm", "heated", "burning"]),
    ("sure", &["unsure", "uncertain", "doubtful"]),
    ("not", &["definitely", "certainly", "absolutely"]),
];

const BUILTIN_CONTRACTIONS: &[(&str, &str)] =
    &[("I am", "I'm"), ("do not", "don't"), ("is not", "isn't")];

impl TransformationCatalog {
    /// Build a catalog from rule tables.
    ///
    /// Rules are normalized. A source declared twice in one table keeps both
    /// rules, and the first one is tried first.
    pub fn new(definition: CatalogDefinition) -> Self {
        let normalize_rules = |rules: Vec<SubstitutionRule>| -> Vec<SubstitutionRule> {
            rules
                .into_iter()
                .map(|rule| SubstitutionRule::new(&rule.source, &rule.targets))
                .collect()
        };
        let synonyms = normalize_rules(definition.synonyms);
        let antonyms = normalize_rules(definition.antonyms);

        TransformationCatalog {
            synonyms,
            antonyms,
            contractions: definition.contractions,
        }
    }

    /// The built-in English catalog.
    pub fn builtin() -> Self {
        let table = |rules: &[(&str, &[&str])]| -> Vec<SubstitutionRule> {
            rules
                .iter()
                .map(|(source, targets)| SubstitutionRule::new(source, *targets))
                .collect()
        };

        Self::new(CatalogDefinition {
            synonyms: table(BUILTIN_SYNONYMS),
            antonyms: table(BUILTIN_ANTONYMS),
            contractions: BUILTIN_CONTRACTIONS
                .iter()
                .map(|(phrase, contraction)| ContractionRule::new(*phrase, *contraction))
                .collect(),
        })
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition: CatalogDefinition = serde_json::from_str(json)
            .map_err(|e| TextioError::catalog(format!("Failed to parse catalog JSON: {e}")))?;

        for rule in definition.synonyms.iter().chain(&definition.antonyms) {
            if normalize(&rule.source).is_empty() {
                return Err(TextioError::catalog("Rule source must not be empty"));
            }
        }
        for rule in &definition.contractions {
            if terms(&rule.phrase).is_empty() || normalize(&rule.contraction).is_empty() {
                return Err(TextioError::catalog(format!(
                    "Contraction rule '{}' → '{}' is incomplete",
                    rule.phrase, rule.contraction
                )));
            }
        }

        Ok(Self::new(definition))
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextioError::catalog(format!(
                "Failed to read catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Substitution rules of a category, in declaration order.
    ///
    /// Contractions are not substitution rules; see [`Self::contractions`].
    pub fn rules(&self, category: RuleCategory) -> &[SubstitutionRule] {
        match category {
            RuleCategory::Synonym => &self.synonyms,
            RuleCategory::Antonym => &self.antonyms,
            RuleCategory::Contraction => &[],
        }
    }

    /// Contraction rules, in declaration order.
    pub fn contractions(&self) -> &[ContractionRule] {
        &self.contractions
    }

    /// Total number of rules across all tables.
    pub fn len(&self) -> usize {
        self.synonyms.len() + self.antonyms.len() + self.contractions.len()
    }

    /// Check if the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
