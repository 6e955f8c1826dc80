//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{OutputFormat, TextioArgs};
use crate::corpus::IndexEntry;
use crate::coverage::CoveragePlan;
use crate::engine::RunReport;
use crate::error::Result;
use crate::platform::Platform;
use crate::transformer::TransformOutcome;

/// Rendering of a command result for people.
pub trait HumanReadable {
    /// Multi-line text shown in `human` format.
    fn render_human(&self) -> String;
}

/// Result structure for the `platforms` command.
#[derive(Debug, Serialize)]
pub struct PlatformList {
    pub platforms: Vec<Platform>,
}

/// Result structure for the `index` command.
#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub seed_words: usize,
    pub sentences: usize,
    pub terms: usize,
    pub postings: usize,
    pub catalog_rules: usize,
}

/// Result structure for `index --term`.
#[derive(Debug, Serialize)]
pub struct TermEntries {
    pub term: String,
    pub entries: Vec<IndexEntry>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &TextioArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &TextioArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextioArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanReadable for RunReport {
    fn render_human(&self) -> String {
        let mut out = String::new();

        for chunk in &self.chunks {
            let _ = writeln!(out, "{} (chunk {})", chunk.platform, chunk.index + 1);
            let _ = writeln!(out, "─────────────");
            let _ = writeln!(out, "{}", chunk.text);
            let _ = writeln!(out, "{}", chunk.summary());
            for transformation in &chunk.transformations {
                let _ = writeln!(out, "  {transformation}");
            }
            if !chunk.truncated.is_empty() {
                let _ = writeln!(out, "  not covered: {}", chunk.truncated.join(", "));
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Log:");
        for line in &self.log {
            let _ = writeln!(out, "  {line}");
        }
        out
    }
}

impl HumanReadable for CoveragePlan {
    fn render_human(&self) -> String {
        let mut out = String::new();

        for (i, result) in self.results.iter().enumerate() {
            let marker = if result.fallback {
                " (fallback)"
            } else if result.transformed {
                " (transformed)"
            } else {
                ""
            };
            let _ = writeln!(out, "{}. {}{marker}", i + 1, result.text);
            let _ = writeln!(out, "   covers: {}", result.covered.join(", "));
            for transformation in &result.transformations {
                let _ = writeln!(out, "   {transformation}");
            }
        }
        if self.is_truncated() {
            let _ = writeln!(out, "Not covered: {}", self.truncated.join(", "));
        }
        out
    }
}

impl HumanReadable for TransformOutcome {
    fn render_human(&self) -> String {
        let mut out = String::new();

        if !self.success {
            let _ = writeln!(out, "No transformation applies");
            return out;
        }
        let _ = writeln!(out, "{}", self.sentence);
        if self.transformations.is_empty() {
            let _ = writeln!(out, "  (already present)");
        }
        for transformation in &self.transformations {
            let _ = writeln!(out, "  {transformation}");
        }
        out
    }
}

impl HumanReadable for PlatformList {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for platform in &self.platforms {
            let _ = writeln!(out, "{:<10} {platform}", platform.id);
        }
        out
    }
}

impl HumanReadable for IndexStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Index Statistics:");
        let _ = writeln!(out, "════════════════");
        let _ = writeln!(out, "Seed words: {}", self.seed_words);
        let _ = writeln!(out, "Sentences: {}", self.sentences);
        let _ = writeln!(out, "Distinct terms: {}", self.terms);
        let _ = writeln!(out, "Postings: {}", self.postings);
        let _ = writeln!(out, "Catalog rules: {}", self.catalog_rules);
        out
    }
}

impl HumanReadable for TermEntries {
    fn render_human(&self) -> String {
        let mut out = String::new();
        if self.entries.is_empty() {
            let _ = writeln!(out, "No sentences contain '{}'", self.term);
            return out;
        }
        let _ = writeln!(out, "Sentences containing '{}':", self.term);
        for entry in &self.entries {
            let _ = writeln!(out, "  {}", entry.sentence);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Textio;

    #[test]
    fn test_render_report() {
        let report = Textio::builtin().run("xylophone", 6, &[]).unwrap();
        let text = report.render_human();
        assert!(text.starts_with("💬 WhatsApp (chunk 1)"));
        assert!(text.contains("I wanted to mention xylophone today"));
        assert!(text.contains("Result: 1/1 covered, 0 transformed"));
        assert!(text.contains("  FALLBACK: no sentence for [xylophone]"));
    }

    #[test]
    fn test_render_plan_markers() {
        let plan = Textio::builtin().plan(&["nice".to_string(), "zither".to_string()]);
        let text = plan.render_human();
        assert!(text.contains("1. This is a nice idea (transformed)"));
        assert!(text.contains("synonym: good → nice"));
        assert!(text.contains("2. I wanted to mention zither today (fallback)"));
    }

    #[test]
    fn test_render_transform_failure() {
        let outcome = Textio::builtin().transform("The weather is cool", "xylophone");
        assert_eq!(outcome.render_human(), "No transformation applies\n");
    }

    #[test]
    fn test_render_term_entries() {
        let entries = TermEntries {
            term: "zebra".to_string(),
            entries: Vec::new(),
        };
        assert_eq!(entries.render_human(), "No sentences contain 'zebra'\n");
    }
}
