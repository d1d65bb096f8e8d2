//! Word tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{LexigraphError, Result};

/// Delimiter class: runs of whitespace or sentence punctuation.
const DELIMITER_PATTERN: &str = r"[\s,.;!?]+";

/// A tokenizer that splits text on runs of whitespace and the punctuation
/// set `, . ; ! ?`, lower-casing every token.
///
/// A token is classified [`TokenKind::Word`] only if it consists entirely of
/// ASCII letters after lower-casing; fragments containing digits,
/// apostrophes, hyphens, etc. come out as [`TokenKind::Other`]. The
/// tokenizer itself drops nothing; filtering is the caller's policy.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The compiled delimiter pattern.
    delimiter: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the standard delimiter set.
    pub fn new() -> Result<Self> {
        let delimiter = Regex::new(DELIMITER_PATTERN)
            .map_err(|e| LexigraphError::analysis(format!("invalid delimiter pattern: {e}")))?;

        Ok(WordTokenizer {
            delimiter: Arc::new(delimiter),
        })
    }

    /// Classify a lower-cased token.
    fn detect_kind(text: &str) -> TokenKind {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase()) {
            TokenKind::Word
        } else {
            TokenKind::Other
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("standard delimiter pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        // Tokens are the gaps between delimiter matches.
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.delimiter.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(make_token(text, last_end, mat.start(), position));
                position += 1;
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(make_token(text, last_end, text.len(), position));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

fn make_token(text: &str, start: usize, end: usize, position: usize) -> Token {
    let lowered = text[start..end].to_lowercase();
    let kind = WordTokenizer::detect_kind(&lowered);
    Token::with_offsets(&lowered, position, start, end).with_kind(kind)
}
