//! Concordance sorting by left or right context.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::concordance::builder::ConcordanceBuilder;
use crate::concordance::window::ConcordanceWindow;

/// Which context a concordance is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortSide {
    /// Order by the whole window, which starts with the left context.
    Left,
    /// Order by the tokens after the target word.
    Right,
}

impl From<bool> for SortSide {
    fn from(left_sort: bool) -> Self {
        if left_sort {
            SortSide::Left
        } else {
            SortSide::Right
        }
    }
}

impl fmt::Display for SortSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSide::Left => write!(f, "left"),
            SortSide::Right => write!(f, "right"),
        }
    }
}

/// Sorts concordance windows by one side of their context.
///
/// Sorting by a side whose context size is zero yields no windows. Both sorts
/// are stable, so identical keys keep their occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcordanceSorter {
    builder: ConcordanceBuilder,
    side: SortSide,
}

impl ConcordanceSorter {
    /// Create a new sorter over windows built by `builder`.
    pub fn new(builder: ConcordanceBuilder, side: SortSide) -> Self {
        ConcordanceSorter { builder, side }
    }

    /// Get the side windows are ordered by.
    pub fn side(&self) -> SortSide {
        self.side
    }

    /// Build the concordance of `word` and sort it.
    pub fn sort(&self, tokens: &[Token], word: &str) -> Vec<ConcordanceWindow> {
        if !self.has_context() {
            return Vec::new();
        }
        self.sort_windows(self.builder.build(tokens, word))
    }

    /// Sort windows previously built with this sorter's context sizes.
    pub fn sort_windows(&self, mut windows: Vec<ConcordanceWindow>) -> Vec<ConcordanceWindow> {
        if !self.has_context() {
            return Vec::new();
        }

        match self.side {
            SortSide::Left => windows.sort_by(|a, b| a.tokens().cmp(b.tokens())),
            SortSide::Right => windows.sort_by(|a, b| a.right_context().cmp(b.right_context())),
        }
        windows
    }

    /// Whether context was requested on the side being sorted by.
    fn has_context(&self) -> bool {
        match self.side {
            SortSide::Left => self.builder.left_context_size() > 0,
            SortSide::Right => self.builder.right_context_size() > 0,
        }
    }
}

/// Get the concordance of `word` sorted by its left context (`left_sort`) or
/// by its right context.
pub fn sort_concordance(
    tokens: &[Token],
    word: &str,
    left_context_size: usize,
    right_context_size: usize,
    left_sort: bool,
) -> Vec<ConcordanceWindow> {
    let builder = ConcordanceBuilder::new(left_context_size, right_context_size);
    ConcordanceSorter::new(builder, SortSide::from(left_sort)).sort(tokens, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn sample_tokens() -> Vec<Token> {
        tokens(&[
            "the", "weather", "is", "sunny", "the", "man", "is", "happy", "the", "dog", "is",
            "happy", "but", "the", "cat", "is", "sad",
        ])
    }

    fn texts(windows: &[ConcordanceWindow]) -> Vec<String> {
        windows.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_left_sort() {
        let windows = sort_concordance(&sample_tokens(), "happy", 2, 3, true);

        assert_eq!(
            texts(&windows),
            vec!["dog is happy but the cat", "man is happy the dog is"]
        );
    }

    #[test]
    fn test_right_sort() {
        let windows = sort_concordance(&sample_tokens(), "happy", 2, 3, false);

        assert_eq!(
            texts(&windows),
            vec!["dog is happy but the cat", "man is happy the dog is"]
        );
    }

    #[test]
    fn test_right_sort_ignores_left_context() {
        let input = tokens(&["a", "x", "c", "b", "x", "a"]);

        let windows = sort_concordance(&input, "x", 1, 1, false);

        assert_eq!(texts(&windows), vec!["b x a", "a x c"]);
    }

    #[test]
    fn test_right_sort_uses_each_windows_own_center() {
        // The first window is clamped, so its occurrence sits at index 0.
        let input = tokens(&["x", "z", "m", "k", "x", "b"]);

        let windows = sort_concordance(&input, "x", 2, 1, false);

        assert_eq!(texts(&windows), vec!["m k x b", "x z"]);
    }

    #[test]
    fn test_sort_on_side_without_context() {
        assert!(sort_concordance(&sample_tokens(), "happy", 0, 3, true).is_empty());
        assert!(sort_concordance(&sample_tokens(), "happy", 2, 0, false).is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_identical_windows() {
        let input = tokens(&["a", "x", "a", "x", "a"]);
        let sorter = ConcordanceSorter::new(ConcordanceBuilder::new(1, 1), SortSide::Left);

        let windows = sorter.sort(&input, "x");

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], windows[1]);
        assert_eq!(texts(&windows), vec!["a x a", "a x a"]);
    }

    #[test]
    fn test_sort_windows_matches_sort() {
        let input = sample_tokens();
        let builder = ConcordanceBuilder::new(1, 2);
        let sorter = ConcordanceSorter::new(builder, SortSide::Right);

        let prebuilt = sorter.sort_windows(builder.build(&input, "is"));

        assert_eq!(prebuilt, sorter.sort(&input, "is"));
    }

    #[test]
    fn test_sort_side_from_bool() {
        assert_eq!(SortSide::from(true), SortSide::Left);
        assert_eq!(SortSide::from(false), SortSide::Right);
        assert_eq!(SortSide::Left.to_string(), "left");
    }
}
