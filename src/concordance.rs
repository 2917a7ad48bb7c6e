//! Concordance extraction.
//!
//! A concordance lists every occurrence of a target word together with the
//! words around it. This module builds the context windows
//! ([`builder`]), reduces them to the nearest neighbours ([`adjacent`]) and
//! orders them by their left or right context ([`sort`]).
//!
//! # Examples
//!
//! ```
//! use concordancer::analysis::tokenizer::tokenize;
//! use concordancer::concordance::get_concordance;
//!
//! let tokens = tokenize(
//!     "The weather is sunny, the man is happy. \
//!      The dog is happy but the cat is sad.",
//! );
//!
//! let windows = get_concordance(&tokens, "happy", 2, 3);
//! assert_eq!(windows.len(), 2);
//! assert_eq!(windows[0].to_string(), "man is happy the dog is");
//! assert_eq!(windows[1].to_string(), "dog is happy but the cat");
//! ```

pub mod adjacent;
pub mod builder;
pub mod sort;
pub mod window;

// Re-export commonly used types
pub use adjacent::{AdjacencyPair, get_adjacent_words};
pub use builder::{ConcordanceBuilder, get_concordance};
pub use sort::{ConcordanceSorter, SortSide, sort_concordance};
pub use window::ConcordanceWindow;
