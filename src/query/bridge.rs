//! Bridge-word lookup.
//!
//! A bridge word for the ordered pair `(a, b)` is any vertex `w` such that
//! the edges `a -> w` and `w -> b` both exist.

use ahash::AHashSet;

use crate::error::{LexigraphError, Result};
use crate::graph::store::WordGraph;

/// Derives single-hop intermediaries between two words of a graph.
///
/// # Examples
///
/// ```
/// use lexigraph::graph::builder::GraphBuilder;
/// use lexigraph::query::bridge::BridgeWordFinder;
///
/// let graph = GraphBuilder::new().unwrap().build_from_text("a b c").unwrap();
/// let bridges = BridgeWordFinder::new(&graph).bridge_words("a", "c").unwrap();
/// assert!(bridges.contains("b"));
/// ```
pub struct BridgeWordFinder<'a> {
    graph: &'a WordGraph,
}

impl<'a> BridgeWordFinder<'a> {
    /// Create a finder over the given graph.
    pub fn new(graph: &'a WordGraph) -> Self {
        BridgeWordFinder { graph }
    }

    /// All bridge words from `word1` to `word2`.
    ///
    /// Fails with [`VertexAbsent`](LexigraphError::VertexAbsent) naming
    /// whichever endpoint(s) are unknown. An empty set is a successful
    /// outcome meaning "no bridge words"; the set carries no ordering.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Result<AHashSet<String>> {
        let missing: Vec<&str> = [word1, word2]
            .into_iter()
            .filter(|w| !self.graph.contains(w))
            .collect();
        if !missing.is_empty() {
            return Err(LexigraphError::vertex_absent(missing));
        }

        Ok(self.bridge_set(word1, word2))
    }

    /// Bridge words with absent endpoints treated as "no bridges".
    ///
    /// Text generation uses this form so a sentence containing unknown words
    /// never aborts mid-expansion.
    pub(crate) fn bridge_set(&self, word1: &str, word2: &str) -> AHashSet<String> {
        self.bridge_list(word1, word2).into_iter().collect()
    }

    /// Bridge words in the graph's insertion order, tolerant of unknown
    /// endpoints.
    ///
    /// The generator draws from this list, so a seeded random source alone
    /// decides the pick and identical seeds reproduce identical expansions.
    pub(crate) fn bridge_list(&self, word1: &str, word2: &str) -> Vec<String> {
        self.graph
            .outgoing(word1)
            .filter(|&(neighbor, _)| self.graph.has_edge(neighbor, word2))
            .map(|(neighbor, _)| neighbor.to_string())
            .collect()
    }
}
