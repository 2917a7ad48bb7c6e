//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline: they turn raw document text
//! into a stream of normalized tokens.
//!
//! # Examples
//!
//! ```
//! use concordancer::analysis::tokenizer::tokenize;
//!
//! let tokens = tokenize("The weather is sunny, the man is happy.");
//! assert_eq!(
//!     tokens,
//!     vec!["the", "weather", "is", "sunny", "the", "man", "is", "happy"]
//! );
//! ```

use crate::analysis::token::{Token, TokenStream};

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared freely.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod word;

pub use word::WordTokenizer;

/// Split `text` into lowercase, punctuation-free word tokens.
///
/// Never fails: any string is valid input and an empty string yields an empty
/// sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    WordTokenizer::new().tokenize(text).collect()
}
