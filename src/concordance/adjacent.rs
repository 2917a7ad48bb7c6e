//! Adjacent word extraction.
//!
//! Reduces each concordance window to its outermost tokens: the word
//! `left_n` positions before the occurrence and/or the word `right_n`
//! positions after it.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::concordance::builder::get_concordance;
use crate::concordance::window::ConcordanceWindow;

/// The neighbours of one occurrence of the target word.
///
/// Only the requested sides are populated. Near the edges of a text the
/// window is clamped, so a neighbour is the outermost token that exists on
/// that side (which may be the target word itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyPair {
    /// First token of the window, when a left distance was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Token>,
    /// Last token of the window, when a right distance was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Token>,
}

impl AdjacencyPair {
    /// Extract the neighbours of a window built with `(left_n, right_n)`.
    pub fn from_window(window: &ConcordanceWindow, left_n: usize, right_n: usize) -> Self {
        let left = if left_n == 0 {
            None
        } else {
            window.first().cloned()
        };
        let right = if right_n == 0 {
            None
        } else {
            window.last().cloned()
        };

        AdjacencyPair { left, right }
    }

    /// The neighbours as a list: `[left, right]`, or a single element when
    /// only one side was requested.
    pub fn to_vec(&self) -> Vec<Token> {
        self.left.iter().chain(self.right.iter()).cloned().collect()
    }

    /// Get the number of neighbours held.
    pub fn len(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Check whether no neighbour is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Get the adjacent words of every occurrence of `word`.
///
/// With `left_n == 0` each result holds only the right neighbour; with
/// `right_n == 0` only the left one; otherwise both. Both distances zero
/// yields an empty list, like [`get_concordance`].
pub fn get_adjacent_words(
    tokens: &[Token],
    word: &str,
    left_n: usize,
    right_n: usize,
) -> Vec<AdjacencyPair> {
    get_concordance(tokens, word, left_n, right_n)
        .iter()
        .map(|window| AdjacencyPair::from_window(window, left_n, right_n))
        .collect()
}
