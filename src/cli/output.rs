//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordancerArgs, OutputFormat};
use crate::concordance::{AdjacencyPair, ConcordanceWindow};
use crate::error::Result;
use crate::frequency::TermFrequency;
use crate::pipeline::PipelineSummary;

/// Result structure for the concordance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConcordanceResult {
    pub word: String,
    pub windows: Vec<ConcordanceWindow>,
    pub report_path: Option<PathBuf>,
}

/// Result structure for the adjacent command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdjacencyResult {
    pub word: String,
    pub pairs: Vec<AdjacencyPair>,
}

/// Result structure for the top command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopWordsResult {
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub words: Vec<TermFrequency>,
}

/// Types that know how to print themselves for people.
pub trait HumanOutput {
    /// Render the value as output lines.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for ConcordanceResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Concordance of '{}':", self.word)];
        lines.push("═".repeat(lines[0].chars().count()));
        lines.extend(self.windows.iter().map(ToString::to_string));
        lines.push(String::new());
        lines.push(format!("Occurrences: {}", self.windows.len()));
        if let Some(path) = &self.report_path {
            lines.push(format!("Report written to: {}", path.display()));
        }
        lines
    }
}

impl HumanOutput for AdjacencyResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Adjacent words of '{}':", self.word)];
        lines.push("═".repeat(lines[0].chars().count()));
        lines.extend(self.pairs.iter().map(|pair| pair.to_vec().join(" ")));
        lines.push(String::new());
        lines.push(format!("Occurrences: {}", self.pairs.len()));
        lines
    }
}

impl HumanOutput for TopWordsResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec!["Most frequent words:".to_string()];
        lines.push("════════════════════".to_string());

        let width = self
            .words
            .iter()
            .map(|entry| entry.term.chars().count())
            .max()
            .unwrap_or(0);
        lines.extend(
            self.words
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{:>3}. {:<width$}  {}", i + 1, entry.term, entry.count)),
        );

        lines.push(String::new());
        lines.push(format!("Total tokens: {}", self.total_tokens));
        lines.push(format!("Distinct tokens: {}", self.distinct_tokens));
        lines
    }
}

impl HumanOutput for PipelineSummary {
    fn human_lines(&self) -> Vec<String> {
        let analysis = &self.analysis;
        let mut lines = vec![
            format!("Input: {}", self.input_path.display()),
            format!(
                "Tokens: {} ({} after stop words, {} distinct)",
                analysis.token_count, analysis.filtered_token_count, analysis.distinct_token_count
            ),
        ];

        if !analysis.top_words.is_empty() {
            let top: Vec<String> = analysis
                .top_words
                .iter()
                .map(|entry| format!("{} ({})", entry.term, entry.count))
                .collect();
            lines.push(format!("Top words: {}", top.join(", ")));
        }

        lines.push(format!(
            "Concordance windows for '{}': {}",
            analysis.word,
            analysis.windows.len()
        ));
        let adjacent: Vec<String> = analysis
            .adjacent
            .iter()
            .map(|pair| format!("[{}]", pair.to_vec().join(", ")))
            .collect();
        lines.push(format!("Adjacent words: {}", adjacent.join(" ")));
        lines.push(format!("Report written to: {}", self.report_path.display()));
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &ConcordancerArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ConcordancerArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ConcordancerArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result to JSON, optionally pretty-printed.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
