//! Token types for text analysis.
//!
//! A token is a normalized word: lowercase, alphanumeric only. It carries no
//! identity beyond its text, so it is represented by a plain `String`. Order
//! matters everywhere downstream, so token sequences are vectors kept in
//! document order.
//!
//! # Examples
//!
//! ```
//! use concordancer::analysis::token::{IntoTokenStream, Token};
//!
//! let tokens: Vec<Token> = vec!["hello".to_string(), "world".to_string()];
//! let collected: Vec<Token> = tokens.into_token_stream().collect();
//! assert_eq!(collected, vec!["hello", "world"]);
//! ```

/// A single normalized word.
pub type Token = String;

/// A token stream represents a lazy sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

impl IntoTokenStream for &[Token] {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.to_vec().into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_stream() {
        let tokens = vec!["hello".to_string(), "world".to_string()];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0], "hello");
        assert_eq!(collected[1], "world");
    }

    #[test]
    fn test_slice_token_stream_preserves_order() {
        let tokens = vec!["b".to_string(), "a".to_string(), "b".to_string()];

        let collected: Vec<_> = tokens.as_slice().into_token_stream().collect();

        assert_eq!(collected, tokens);
    }
}
