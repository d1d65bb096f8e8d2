//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from the tokenizer into graph
//! construction and text generation. Tokens are already lower-cased by the
//! tokenizer; the [`TokenKind`] records whether a token is eligible for
//! adjacency building (`Word`) or is passed through only in generation
//! output (`Other`).
//!
//! # Examples
//!
//! ```
//! use lexigraph::analysis::token::{Token, TokenKind};
//!
//! let token = Token::with_offsets("hello", 0, 0, 5).with_kind(TokenKind::Word);
//! assert_eq!(token.text, "hello");
//! assert!(token.is_word());
//! ```

use serde::{Deserialize, Serialize};

/// Classification of a token's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Entirely ASCII letters after lower-casing; participates in adjacency
    /// building.
    Word,
    /// Anything else (digits, punctuation fragments, mixed content); skipped
    /// by graph construction, passed through verbatim by text generation.
    Other,
}

/// A single unit of text produced by tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The lower-cased text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,

    /// Content classification.
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token with position information only.
    pub fn new(text: &str, position: usize) -> Self {
        Token {
            text: text.to_string(),
            position,
            start_offset: 0,
            end_offset: 0,
            kind: TokenKind::Other,
        }
    }

    /// Create a new token with byte offsets into the original text.
    pub fn with_offsets(text: &str, position: usize, start: usize, end: usize) -> Self {
        Token {
            text: text.to_string(),
            position,
            start_offset: start,
            end_offset: end,
            kind: TokenKind::Other,
        }
    }

    /// Set the token kind.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this token participates in adjacency building.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// A boxed iterator of tokens, as produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert_eq!(token.kind, TokenKind::Other);
    }

    #[test]
    fn test_token_with_offsets_and_kind() {
        let token = Token::with_offsets("world", 1, 6, 11).with_kind(TokenKind::Word);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
        assert!(token.is_word());
    }
}
