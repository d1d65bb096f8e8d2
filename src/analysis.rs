//! Text analysis module for lexigraph.
//!
//! This module provides the tokenization front of the graph-construction
//! pipeline: splitting raw document text into normalized word tokens.

pub mod token;
pub mod tokenizer;
