//! Command line argument parsing for the Textio CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Textio - cover a message with example sentences
#[derive(Parser, Debug, Clone)]
#[command(name = "textio")]
#[command(about = "Cover the words of a message with as few example sentences as possible")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextioArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "TEXTIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Corpus file (JSON) replacing the built-in corpus
    #[arg(long, value_name = "CORPUS_FILE", env = "TEXTIO_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

    /// Catalog file (JSON) replacing the built-in catalog
    #[arg(long, value_name = "CATALOG_FILE", env = "TEXTIO_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split a message into chunks and cover each chunk
    Generate(GenerateArgs),

    /// Cover a list of words as a single group
    Cover(CoverArgs),

    /// Rewrite one sentence so it contains a word
    Transform(TransformArgs),

    /// List the built-in platforms
    Platforms,

    /// Show corpus index statistics
    Index(IndexArgs),
}

/// Arguments for generating chunked output
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Message to cover
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Words per chunk (default from configuration)
    #[arg(short, long)]
    pub chunk_size: Option<usize>,

    /// Maximum sentences per chunk (default from configuration)
    #[arg(short = 'm', long)]
    pub max_sentences: Option<usize>,

    /// Platform order (comma-separated ids)
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Vec<String>,
}

/// Arguments for covering a word list
#[derive(Parser, Debug, Clone)]
pub struct CoverArgs {
    /// Words to cover
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum sentences (default from configuration)
    #[arg(short = 'm', long)]
    pub max_sentences: Option<usize>,
}

/// Arguments for transforming a sentence
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Sentence to rewrite
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Word the sentence should contain
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Show the entries registered under one term
    #[arg(short, long)]
    pub term: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_generate_command() {
        let args = TextioArgs::try_parse_from([
            "textio",
            "generate",
            "Man, I am not sure",
            "--chunk-size",
            "3",
            "--platforms",
            "discord,linkedin",
        ])
        .unwrap();

        if let Command::Generate(generate_args) = args.command {
            assert_eq!(generate_args.message, "Man, I am not sure");
            assert_eq!(generate_args.chunk_size, Some(3));
            assert_eq!(generate_args.max_sentences, None);
            assert_eq!(generate_args.platforms, vec!["discord", "linkedin"]);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cover_command() {
        let args =
            TextioArgs::try_parse_from(["textio", "cover", "man", "i", "--max-sentences", "2"])
                .unwrap();

        if let Command::Cover(cover_args) = args.command {
            assert_eq!(cover_args.words, vec!["man", "i"]);
            assert_eq!(cover_args.max_sentences, Some(2));
        } else {
            panic!("Expected Cover command");
        }
    }

    #[test]
    fn test_cover_requires_words() {
        assert!(TextioArgs::try_parse_from(["textio", "cover"]).is_err());
    }

    #[test]
    fn test_transform_command() {
        let args =
            TextioArgs::try_parse_from(["textio", "transform", "This is a good idea", "great"])
                .unwrap();

        if let Command::Transform(transform_args) = args.command {
            assert_eq!(transform_args.sentence, "This is a good idea");
            assert_eq!(transform_args.word, "great");
        } else {
            panic!("Expected Transform command");
        }
    }

    #[test]
    fn test_global_options() {
        let args = TextioArgs::try_parse_from([
            "textio",
            "-vv",
            "--format",
            "json",
            "--pretty",
            "--corpus",
            "corpus.json",
            "index",
            "--term",
            "man",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.corpus, Some(PathBuf::from("corpus.json")));
        if let Command::Index(index_args) = args.command {
            assert_eq!(index_args.term.as_deref(), Some("man"));
        } else {
            panic!("Expected Index command");
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = TextioArgs::try_parse_from(["textio", "-q", "-vvv", "platforms"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = TextioArgs::try_parse_from(["textio", "platforms"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }
}
