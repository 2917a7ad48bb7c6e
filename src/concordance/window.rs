//! Concordance window type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// The tokens surrounding one occurrence of the target word.
///
/// `center` is the index of the occurrence inside `tokens`. Windows near the
/// start or end of a text are clamped, so the occurrence is not always at
/// index `left_context_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordanceWindow {
    /// Window tokens in document order.
    tokens: Vec<Token>,
    /// Index of the target occurrence within `tokens`.
    center: usize,
}

impl ConcordanceWindow {
    /// Create a new window. `center` must index into `tokens`.
    pub fn new(tokens: Vec<Token>, center: usize) -> Self {
        debug_assert!(center < tokens.len());
        ConcordanceWindow { tokens, center }
    }

    /// Get all tokens of the window.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the index of the target occurrence.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The target word itself.
    pub fn word(&self) -> &str {
        &self.tokens[self.center]
    }

    /// Tokens strictly before the target word.
    pub fn left_context(&self) -> &[Token] {
        &self.tokens[..self.center]
    }

    /// Tokens strictly after the target word.
    pub fn right_context(&self) -> &[Token] {
        &self.tokens[self.center + 1..]
    }

    /// First token of the window.
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Last token of the window.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Get the number of tokens in the window.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the window and return its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl AsRef<[Token]> for ConcordanceWindow {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for ConcordanceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(words: &[&str], center: usize) -> ConcordanceWindow {
        ConcordanceWindow::new(words.iter().map(|s| s.to_string()).collect(), center)
    }

    #[test]
    fn test_window_parts() {
        let w = window(&["man", "is", "happy", "the", "dog", "is"], 2);

        assert_eq!(w.word(), "happy");
        assert_eq!(w.left_context(), ["man", "is"]);
        assert_eq!(w.right_context(), ["the", "dog", "is"]);
        assert_eq!(w.first().map(String::as_str), Some("man"));
        assert_eq!(w.last().map(String::as_str), Some("is"));
        assert_eq!(w.len(), 6);
    }

    #[test]
    fn test_window_at_text_edges() {
        let w = window(&["happy", "the"], 0);

        assert!(w.left_context().is_empty());
        assert_eq!(w.right_context(), ["the"]);

        let w = window(&["is", "happy"], 1);
        assert!(w.right_context().is_empty());
    }

    #[test]
    fn test_window_display() {
        let w = window(&["dog", "is", "happy"], 2);
        assert_eq!(format!("{w}"), "dog is happy");
    }
}
