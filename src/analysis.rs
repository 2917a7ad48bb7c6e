//! Text analysis module for Concordancer.
//!
//! This module turns raw text into normalized tokens and removes stop words.
//! Everything downstream (frequencies, concordances) works on its output.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
