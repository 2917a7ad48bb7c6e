//! Stop filter implementation.
//!
//! This module provides a filter that removes stop words, the configured
//! words excluded from frequency and ranking analysis.
//!
//! # Examples
//!
//! ```
//! use concordancer::analysis::token_filter::remove_stop_words;
//!
//! let tokens: Vec<String> = ["the", "weather", "is", "sunny", "the", "man", "is", "happy"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let result = remove_stop_words(&tokens, &["the", "is"]);
//! assert_eq!(result, vec!["weather", "sunny", "man", "happy"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// A filter that removes stop words from the token stream.
///
/// Membership is all that matters: duplicates in the source word list are
/// collapsed, and tokens that are not stop words pass through unchanged and in
/// their original order, duplicates included.
///
/// # Examples
///
/// ```
/// use concordancer::analysis::token::IntoTokenStream;
/// use concordancer::analysis::token_filter::Filter;
/// use concordancer::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["this", "is"]);
/// let tokens = vec!["this".to_string(), "is".to_string(), "test".to_string()];
///
/// let result: Vec<_> = filter.filter(tokens.into_token_stream()).collect();
/// assert_eq!(result, vec!["test"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter that removes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use concordancer::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "foo"]);
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Filter a token slice into a new sequence.
    pub fn apply(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|token| !self.is_stop_word(token))
            .cloned()
            .collect()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(token))
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// Remove every token that appears in `stop_words`, keeping the order of the rest.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[Token], stop_words: &[S]) -> Vec<Token> {
    StopFilter::from_words(stop_words.iter().map(|s| s.as_ref().to_string())).apply(tokens)
}
