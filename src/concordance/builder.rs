//! Concordance window construction.

use log::debug;

use crate::analysis::token::Token;
use crate::concordance::window::ConcordanceWindow;

/// Builds context windows around every occurrence of a word.
///
/// For an occurrence at index `i` the window spans
/// `tokens[i - left_context_size ..= i + right_context_size]`, clamped to the
/// bounds of the sequence. A zero size on one side simply leaves that side
/// out. When both sizes are zero no windows are produced at all, even if the
/// word occurs.
///
/// # Examples
///
/// ```
/// use concordancer::concordance::builder::ConcordanceBuilder;
///
/// let tokens: Vec<String> = ["a", "b", "x", "c", "x"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let windows = ConcordanceBuilder::new(1, 1).build(&tokens, "x");
/// assert_eq!(windows[0].tokens(), ["b", "x", "c"]);
/// assert_eq!(windows[1].tokens(), ["c", "x"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcordanceBuilder {
    left_context_size: usize,
    right_context_size: usize,
}

impl ConcordanceBuilder {
    /// Create a new builder with the given context sizes.
    pub fn new(left_context_size: usize, right_context_size: usize) -> Self {
        ConcordanceBuilder {
            left_context_size,
            right_context_size,
        }
    }

    /// Get the number of tokens requested before the word.
    pub fn left_context_size(&self) -> usize {
        self.left_context_size
    }

    /// Get the number of tokens requested after the word.
    pub fn right_context_size(&self) -> usize {
        self.right_context_size
    }

    /// Whether no context was requested on either side.
    pub fn is_degenerate(&self) -> bool {
        self.left_context_size == 0 && self.right_context_size == 0
    }

    /// Build one window per occurrence of `word`, in occurrence order.
    pub fn build(&self, tokens: &[Token], word: &str) -> Vec<ConcordanceWindow> {
        if self.is_degenerate() {
            debug!("no context requested for '{word}', skipping concordance");
            return Vec::new();
        }

        let windows: Vec<ConcordanceWindow> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.as_str() == word)
            .map(|(position, _)| self.window_at(tokens, position))
            .collect();

        debug!(
            "built {} windows for '{}' (left={}, right={})",
            windows.len(),
            word,
            self.left_context_size,
            self.right_context_size
        );

        windows
    }

    /// Window around the occurrence at `position`, clamped to the sequence.
    fn window_at(&self, tokens: &[Token], position: usize) -> ConcordanceWindow {
        let start = position.saturating_sub(self.left_context_size);
        let end = position
            .saturating_add(self.right_context_size)
            .saturating_add(1)
            .min(tokens.len());

        ConcordanceWindow::new(tokens[start..end].to_vec(), position - start)
    }
}

/// Get the concordance of `word`: one context window per occurrence.
///
/// Returns an empty list when the word does not occur or when both context
/// sizes are zero.
pub fn get_concordance(
    tokens: &[Token],
    word: &str,
    left_context_size: usize,
    right_context_size: usize,
) -> Vec<ConcordanceWindow> {
    ConcordanceBuilder::new(left_context_size, right_context_size).build(tokens, word)
}
