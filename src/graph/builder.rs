//! Graph construction from document text.

use std::io::Read;

use log::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::{LexigraphError, Result};
use crate::graph::store::WordGraph;

/// Builds a [`WordGraph`] by linking consecutive word tokens of a document.
///
/// Only tokens that are entirely ASCII letters participate; other fragments
/// are skipped without resetting the adjacency chain, so an edge may be
/// recorded across an intervening number or punctuation fragment. This keeps
/// "logical" word adjacency rather than literal text adjacency.
///
/// # Examples
///
/// ```
/// use lexigraph::graph::builder::GraphBuilder;
///
/// let graph = GraphBuilder::new().unwrap().build_from_text("a 7 b").unwrap();
/// assert_eq!(graph.weight("a", "b"), Some(1));
/// ```
pub struct GraphBuilder {
    tokenizer: Box<dyn Tokenizer>,
}

impl GraphBuilder {
    /// Create a builder with the standard word tokenizer.
    pub fn new() -> Result<Self> {
        Ok(GraphBuilder {
            tokenizer: Box::new(WordTokenizer::new()?),
        })
    }

    /// Create a builder with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        GraphBuilder { tokenizer }
    }

    /// Build a graph from an in-memory document.
    pub fn build_from_text(&self, text: &str) -> Result<WordGraph> {
        let mut graph = WordGraph::new();
        let mut previous_word: Option<usize> = None;

        for token in self.tokenizer.tokenize(text)? {
            if !token.is_word() {
                // Skipped fragments do not reset the adjacency chain.
                continue;
            }

            let current = graph.ensure_vertex(&token.text);

            if let Some(previous) = previous_word {
                graph.record_adjacency(previous, current);
            }

            previous_word = Some(current);
        }

        debug!(
            "built graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Build a graph from a document supplied by a reader.
    ///
    /// A failing reader surfaces as
    /// [`InputUnavailable`](LexigraphError::InputUnavailable); no partial
    /// graph is exposed.
    pub fn build_from_reader<R: Read>(&self, mut reader: R) -> Result<WordGraph> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| LexigraphError::input_unavailable(e.to_string()))?;
        self.build_from_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_words_become_edges() {
        let graph = GraphBuilder::new()
            .unwrap()
            .build_from_text("to be or not to be")
            .unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.weight("to", "be"), Some(2));
        assert_eq!(graph.weight("be", "or"), Some(1));
        assert_eq!(graph.weight("not", "to"), Some(1));
    }

    #[test]
    fn test_skipped_fragments_keep_adjacency_chain() {
        // "3" is filtered out, so "alpha" and "beta" are logically adjacent.
        let graph = GraphBuilder::new()
            .unwrap()
            .build_from_text("alpha 3 beta")
            .unwrap();
        assert!(!graph.contains("3"));
        assert_eq!(graph.weight("alpha", "beta"), Some(1));
    }

    #[test]
    fn test_repeated_word_creates_self_loop() {
        let graph = GraphBuilder::new()
            .unwrap()
            .build_from_text("buffalo buffalo")
            .unwrap();
        assert_eq!(graph.weight("buffalo", "buffalo"), Some(1));
    }

    #[test]
    fn test_empty_document_builds_empty_graph() {
        let graph = GraphBuilder::new().unwrap().build_from_text("").unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_failing_reader_is_input_unavailable() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("device gone"))
            }
        }

        let result = GraphBuilder::new().unwrap().build_from_reader(FailingReader);
        match result {
            Err(LexigraphError::InputUnavailable(_)) => {}
            other => panic!("expected InputUnavailable, got {other:?}"),
        }
    }
}
