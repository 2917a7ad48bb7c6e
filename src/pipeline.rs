//! End-to-end concordance pipeline.
//!
//! ```text
//! text file ─▶ tokenize ─┬─▶ stop words ─▶ frequencies ─▶ top-N
//!                        └─▶ concordance ─▶ (sort) ─▶ report.txt
//!                                       └─▶ adjacent words
//! ```
//!
//! Stop words only affect the statistics; windows are cut from the full token
//! sequence so that context reads like the source text.

use std::path::PathBuf;

use log::{info, warn};
use serde::Serialize;

use crate::analysis::token::Token;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::tokenize;
use crate::concordance::{AdjacencyPair, ConcordanceWindow};
use crate::config::ConcordanceConfig;
use crate::error::Result;
use crate::frequency::{TermFrequency, calculate_frequencies};
use crate::report::{read_from_file, read_stop_words, write_to_file};

/// Everything computed from one document, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcordanceAnalysis {
    /// The target word.
    pub word: String,
    /// Number of tokens in the document.
    pub token_count: usize,
    /// Number of tokens left after stop-word removal.
    pub filtered_token_count: usize,
    /// Number of distinct tokens after stop-word removal.
    pub distinct_token_count: usize,
    /// Most frequent tokens after stop-word removal, with counts.
    pub top_words: Vec<TermFrequency>,
    /// Concordance windows, sorted when a sort side is configured.
    pub windows: Vec<ConcordanceWindow>,
    /// Neighbours of each occurrence, in occurrence order.
    pub adjacent: Vec<AdjacencyPair>,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// The document that was analysed.
    pub input_path: PathBuf,
    /// The report file that was written.
    pub report_path: PathBuf,
    /// The computed statistics and windows.
    #[serde(flatten)]
    pub analysis: ConcordanceAnalysis,
}

/// Runs the concordance pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ConcordanceConfig,
}

impl Pipeline {
    /// Create a new pipeline for the given configuration.
    pub fn new(config: ConcordanceConfig) -> Self {
        Pipeline { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ConcordanceConfig {
        &self.config
    }

    /// Read the inputs, analyse them and write the report.
    pub fn run(&self) -> Result<PipelineSummary> {
        self.config.validate()?;

        info!("analysing {}", self.config.input_path.display());
        let text = read_from_file(&self.config.input_path)?;

        let stop_words = match &self.config.stop_words_path {
            Some(path) => read_stop_words(path)?,
            None => Vec::new(),
        };

        let analysis = self.analyze(&text, &stop_words);
        let report_path = write_to_file(&self.config.output_dir, &analysis.windows)?;

        Ok(PipelineSummary {
            input_path: self.config.input_path.clone(),
            report_path,
            analysis,
        })
    }

    /// Analyse `text` in memory. Never fails.
    pub fn analyze<S: AsRef<str>>(&self, text: &str, stop_words: &[S]) -> ConcordanceAnalysis {
        let tokens = tokenize(text);
        let word = self.config.word.as_str();

        let filter = StopFilter::from_words(stop_words.iter().map(|s| s.as_ref().to_string()));
        let filtered: Vec<Token> = filter.apply(&tokens);
        let frequencies = calculate_frequencies(&filtered);

        let builder = self.config.builder();
        let occurrences = builder.build(&tokens, word);
        let adjacent = occurrences
            .iter()
            .map(|window| {
                AdjacencyPair::from_window(
                    window,
                    builder.left_context_size(),
                    builder.right_context_size(),
                )
            })
            .collect();

        let windows = match self.config.sorter() {
            Some(sorter) => sorter.sort_windows(occurrences),
            None => occurrences,
        };

        if windows.is_empty() {
            warn!("no concordance windows for '{word}'");
        }
        info!(
            "{} tokens ({} after stop words), {} windows for '{}'",
            tokens.len(),
            filtered.len(),
            windows.len(),
            word
        );

        ConcordanceAnalysis {
            word: word.to_string(),
            token_count: tokens.len(),
            filtered_token_count: filtered.len(),
            distinct_token_count: frequencies.len(),
            top_words: frequencies.top(self.config.top_n).to_vec(),
            windows,
            adjacent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concordance::SortSide;

    const TEXT: &str = "The weather is sunny, the man is happy. \
                        The dog is happy but the cat is sad.";

    fn pipeline(config: ConcordanceConfig) -> Pipeline {
        Pipeline::new(config)
    }

    #[test]
    fn test_analyze_counts() {
        let analysis =
            pipeline(ConcordanceConfig::new("unused", "happy")).analyze(TEXT, &["the", "is"]);

        assert_eq!(analysis.token_count, 17);
        assert_eq!(analysis.filtered_token_count, 9);
        assert_eq!(analysis.top_words[0], TermFrequency::new("happy", 2));
        assert_eq!(analysis.distinct_token_count, 8);
    }

    #[test]
    fn test_windows_use_unfiltered_tokens() {
        let analysis =
            pipeline(ConcordanceConfig::new("unused", "happy")).analyze(TEXT, &["the", "is"]);

        let lines: Vec<String> = analysis.windows.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["man is happy the dog is", "dog is happy but the cat"]);
        assert_eq!(analysis.adjacent.len(), 2);
        assert_eq!(analysis.adjacent[1].to_vec(), vec!["dog", "cat"]);
    }

    #[test]
    fn test_sorted_windows_keep_adjacent_in_occurrence_order() {
        let config = ConcordanceConfig::new("unused", "happy").with_sort(Some(SortSide::Left));
        let empty: [&str; 0] = [];

        let analysis = pipeline(config).analyze(TEXT, &empty);

        assert_eq!(analysis.windows[0].to_string(), "dog is happy but the cat");
        assert_eq!(analysis.adjacent[0].to_vec(), vec!["man", "is"]);
    }

    #[test]
    fn test_top_n_zero() {
        let config = ConcordanceConfig::new("unused", "happy").with_top_n(0);
        let empty: [&str; 0] = [];

        assert!(pipeline(config).analyze(TEXT, &empty).top_words.is_empty());
    }
}
