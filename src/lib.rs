//! # Concordancer
//!
//! Word concordance extraction for plain-text documents.
//!
//! ## Features
//!
//! - Tokenization into lowercase, punctuation-free words
//! - Stop-word filtering
//! - Frequency counting and top-N selection with deterministic ties
//! - Concordance windows with configurable left/right context
//! - Adjacent-word extraction and context-aware sorting
//! - A flat `report.txt` output and a command line interface
//!
//! ## Example
//!
//! ```
//! use concordancer::analysis::tokenizer::tokenize;
//! use concordancer::concordance::{get_adjacent_words, sort_concordance};
//!
//! let tokens = tokenize("The man is happy. The dog is happy but the cat is sad.");
//!
//! let sorted = sort_concordance(&tokens, "happy", 2, 1, true);
//! assert_eq!(sorted[0].to_string(), "dog is happy but");
//!
//! let adjacent = get_adjacent_words(&tokens, "happy", 1, 1);
//! assert_eq!(adjacent[0].to_vec(), vec!["is", "the"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod concordance;
pub mod config;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
