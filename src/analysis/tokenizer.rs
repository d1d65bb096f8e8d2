//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into a stream of [`Token`](crate::analysis::token::Token)s.
//! The default implementation for graph construction is
//! [`word::WordTokenizer`], which splits on whitespace and sentence
//! punctuation and lower-cases every token.
//!
//! # Examples
//!
//! ```
//! use lexigraph::analysis::tokenizer::Tokenizer;
//! use lexigraph::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Each call to [`tokenize`](Tokenizer::tokenize) yields a fresh, finite
/// stream; tokenizers are pure and hold no per-call state.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word;
