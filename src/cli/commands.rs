//! Command implementations for the Textio CLI.

use crate::analysis::{normalize, words};
use crate::catalog::TransformationCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TextioConfig;
use crate::corpus::Corpus;
use crate::engine::Textio;
use crate::error::{Result, TextioError};
use crate::platform::{PLATFORMS, Platform};

/// Execute a CLI command.
pub fn execute_command(args: TextioArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate(generate_args, &args),
        Command::Cover(cover_args) => cover(cover_args, &args),
        Command::Transform(transform_args) => transform(transform_args, &args),
        Command::Platforms => list_platforms(&args),
        Command::Index(index_args) => show_index(index_args, &args),
    }
}

/// Load configuration, corpus and catalog from the global options.
///
/// `max_sentences` overrides the configured per-chunk cap.
pub fn build_engine(args: &TextioArgs, max_sentences: Option<usize>) -> Result<Textio> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            TextioConfig::load_from_file(path)?
        }
        None => TextioConfig::default(),
    };
    if let Some(max_sentences) = max_sentences {
        config.max_sentences_per_chunk = max_sentences;
    }

    let corpus = match &args.corpus {
        Some(path) => {
            log::info!("loading corpus from {}", path.display());
            Corpus::load_from_file(path)?
        }
        None => Corpus::builtin(),
    };

    let catalog = match &args.catalog {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            TransformationCatalog::load_from_file(path)?
        }
        None => TransformationCatalog::builtin(),
    };

    Textio::new(corpus, catalog, config)
}

/// Split a message into chunks and cover each one.
fn generate(args: &GenerateArgs, cli_args: &TextioArgs) -> Result<()> {
    let engine = build_engine(cli_args, args.max_sentences)?;
    let chunk_size = args.chunk_size.unwrap_or(engine.config().chunk_size);
    let order = Platform::parse_order(&args.platforms)?;

    let report = engine.run(&args.message, chunk_size, &order)?;
    output_result(
        &format!(
            "Covered {} words in {} chunks",
            report.words.len(),
            report.chunks.len()
        ),
        &report,
        cli_args,
    )
}

/// Cover a word list as one group.
fn cover(args: &CoverArgs, cli_args: &TextioArgs) -> Result<()> {
    if args.words.iter().all(|word| words(word).is_empty()) {
        return Err(TextioError::invalid_argument("No words to cover"));
    }

    let engine = build_engine(cli_args, args.max_sentences)?;
    let plan = engine.plan(&args.words);
    output_result(
        &format!(
            "Covered {} words with {} sentences",
            plan.covered().len(),
            plan.results.len()
        ),
        &plan,
        cli_args,
    )
}

/// Rewrite one sentence.
fn transform(args: &TransformArgs, cli_args: &TextioArgs) -> Result<()> {
    let engine = build_engine(cli_args, None)?;
    let outcome = engine.transform(&args.sentence, &args.word);
    output_result(&format!("Transforming for '{}'", args.word), &outcome, cli_args)
}

/// List the built-in platforms.
fn list_platforms(cli_args: &TextioArgs) -> Result<()> {
    let list = PlatformList {
        platforms: PLATFORMS.to_vec(),
    };
    output_result("Platforms", &list, cli_args)
}

/// Show index statistics or the entries of one term.
fn show_index(args: &IndexArgs, cli_args: &TextioArgs) -> Result<()> {
    let engine = build_engine(cli_args, None)?;

    if let Some(term) = &args.term {
        let term = normalize(term);
        let entries = TermEntries {
            entries: engine.index().lookup(&term).to_vec(),
            term,
        };
        return output_result("Index entries", &entries, cli_args);
    }

    let stats = IndexStats {
        seed_words: engine.corpus().len(),
        sentences: engine.corpus().sentence_count(),
        terms: engine.index().len(),
        postings: engine.index().posting_count(),
        catalog_rules: engine.catalog().len(),
    };
    output_result("Index statistics", &stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_engine_defaults() {
        let args = TextioArgs::try_parse_from(["textio", "platforms"]).unwrap();
        let engine = build_engine(&args, Some(7)).unwrap();
        assert_eq!(engine.config().max_sentences_per_chunk, 7);
        assert_eq!(engine.planner().max_sentences(), 7);
        assert_eq!(engine.catalog().len(), 11);
    }

    #[test]
    fn test_build_engine_from_files() {
        let mut corpus = NamedTempFile::new().unwrap();
        write!(corpus, r#"[{{"word": "zebra", "sentences": ["A zebra runs fast"]}}]"#).unwrap();
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"chunk_size": 2}}"#).unwrap();

        let args = TextioArgs::try_parse_from([
            "textio",
            "--corpus",
            corpus.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
            "index",
        ])
        .unwrap();
        let engine = build_engine(&args, None).unwrap();

        assert_eq!(engine.config().chunk_size, 2);
        assert_eq!(engine.index().lookup("zebra").len(), 1);
        assert!(engine.index().lookup("man").is_empty());
    }

    #[test]
    fn test_build_engine_rejects_bad_max_sentences() {
        let args = TextioArgs::try_parse_from(["textio", "platforms"]).unwrap();
        assert!(build_engine(&args, Some(0)).is_err());
    }

    #[test]
    fn test_generate_rejects_unknown_platform() {
        let args = TextioArgs::try_parse_from([
            "textio",
            "-q",
            "generate",
            "Man",
            "--platforms",
            "fax",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_cover_rejects_punctuation_only() {
        let args = TextioArgs::try_parse_from(["textio", "-q", "cover", "?", "!"]).unwrap();
        assert!(matches!(
            execute_command(args),
            Err(TextioError::InvalidArgument(_))
        ));
    }
}
