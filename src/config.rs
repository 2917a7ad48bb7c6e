//! Configuration for a concordance run.
//!
//! A [`ConcordanceConfig`] collects everything one pipeline invocation needs:
//! where to read the document and stop words from, which word to look up,
//! how much context to keep, how to sort, and where to write the report.
//! It can be assembled from CLI flags or loaded from a JSON file; missing
//! JSON fields fall back to the defaults.
//!
//! ```json
//! {
//!   "input_path": "data/text.txt",
//!   "stop_words_path": "data/stop_words.txt",
//!   "word": "happy",
//!   "left_context_size": 2,
//!   "right_context_size": 3,
//!   "sort": "left",
//!   "top_n": 10,
//!   "output_dir": "out"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::concordance::{ConcordanceBuilder, ConcordanceSorter, SortSide};
use crate::error::{ConcordanceError, Result};
use crate::report::read_from_file;

/// Default number of tokens kept before the target word.
pub const DEFAULT_LEFT_CONTEXT_SIZE: usize = 2;

/// Default number of tokens kept after the target word.
pub const DEFAULT_RIGHT_CONTEXT_SIZE: usize = 3;

/// Default number of most frequent words reported.
pub const DEFAULT_TOP_N: usize = 10;

/// Configuration for one concordance pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordanceConfig {
    /// Path of the UTF-8 document to analyse.
    pub input_path: PathBuf,

    /// Optional path of a whitespace-separated stop-word list.
    pub stop_words_path: Option<PathBuf>,

    /// The word whose concordance is extracted.
    pub word: String,

    /// Number of tokens kept before each occurrence.
    pub left_context_size: usize,

    /// Number of tokens kept after each occurrence.
    pub right_context_size: usize,

    /// Sort the concordance by this side of the context.
    /// If None, windows stay in occurrence order.
    pub sort: Option<SortSide>,

    /// Number of most frequent words to report.
    pub top_n: usize,

    /// Directory that receives `report.txt`.
    pub output_dir: PathBuf,
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            stop_words_path: None,
            word: String::new(),
            left_context_size: DEFAULT_LEFT_CONTEXT_SIZE,
            right_context_size: DEFAULT_RIGHT_CONTEXT_SIZE,
            sort: None,
            top_n: DEFAULT_TOP_N,
            output_dir: PathBuf::from("."),
        }
    }
}

impl ConcordanceConfig {
    /// Create a configuration for `word` in the document at `input_path`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(input_path: P, word: S) -> Self {
        Self {
            input_path: input_path.into(),
            word: word.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_from_file(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the stop-word list path.
    pub fn with_stop_words<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Set the context sizes.
    pub fn with_context(mut self, left_context_size: usize, right_context_size: usize) -> Self {
        self.left_context_size = left_context_size;
        self.right_context_size = right_context_size;
        self
    }

    /// Set the sort side.
    pub fn with_sort(mut self, sort: Option<SortSide>) -> Self {
        self.sort = sort;
        self
    }

    /// Set the number of most frequent words.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConcordanceError::config("input_path is required"));
        }
        if self.word.trim().is_empty() {
            return Err(ConcordanceError::invalid_argument(
                "target word must not be empty",
            ));
        }
        Ok(())
    }

    /// Window builder for the configured context sizes.
    pub fn builder(&self) -> ConcordanceBuilder {
        ConcordanceBuilder::new(self.left_context_size, self.right_context_size)
    }

    /// Sorter for the configured sort side, if any.
    pub fn sorter(&self) -> Option<ConcordanceSorter> {
        self.sort
            .map(|side| ConcordanceSorter::new(self.builder(), side))
    }
}
