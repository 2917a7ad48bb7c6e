//! Word tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that lowercases text, drops punctuation and splits on whitespace.
///
/// Characters are kept when they are alphanumeric or whitespace; everything
/// else (punctuation, symbols) is removed before splitting, so `"don't"`
/// becomes the single token `"dont"`.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Lowercase `text` and strip every character that is neither
    /// alphanumeric nor whitespace.
    fn normalize(text: &str) -> String {
        text.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = Self::normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
