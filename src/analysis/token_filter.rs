//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and return a new stream.
//! The only filter the concordance pipeline needs is [`stop::StopFilter`],
//! which removes configured stop words.
//!
//! ```text
//! Tokenizer → Stop Words → Frequencies / Top-N
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters must keep the relative order of the tokens they let through.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod stop;

pub use stop::{StopFilter, remove_stop_words};
