//! The directed weighted graph store.
//!
//! A [`WordGraph`] maps each vertex (a normalized word) to its outgoing
//! edges, each carrying a positive adjacency count. Vertices and out-edges
//! keep insertion order, so iteration is deterministic for display.
//!
//! Mutation is crate-internal: once [`GraphBuilder`](crate::graph::builder::GraphBuilder)
//! has returned a graph, nothing in the public API can change it, which makes
//! unsynchronized concurrent reads sound.
//!
//! # Examples
//!
//! ```
//! use lexigraph::graph::builder::GraphBuilder;
//!
//! let graph = GraphBuilder::new().unwrap().build_from_text("to be or not to be").unwrap();
//! assert!(graph.contains("be"));
//! assert_eq!(graph.weight("to", "be"), Some(2));
//! ```

use ahash::AHashMap;

/// Dense vertex identifier, assigned in insertion order.
pub(crate) type VertexId = usize;

/// A directed graph over normalized words with integer edge weights.
#[derive(Clone, Debug, Default)]
pub struct WordGraph {
    /// Vertex words in insertion order; a vertex's index is its id.
    vertices: Vec<String>,
    /// Word -> vertex id lookup.
    index: AHashMap<String, VertexId>,
    /// Per-vertex out-edges `(target, weight)` in insertion order.
    adjacency: Vec<Vec<(VertexId, u32)>>,
    /// Total number of distinct directed edges.
    edge_count: usize,
}

impl WordGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        WordGraph::default()
    }

    /// Insert the vertex if absent and return its id. Idempotent.
    pub(crate) fn ensure_vertex(&mut self, word: &str) -> VertexId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(word.to_string());
        self.index.insert(word.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Record one observed adjacency from `from` to `to`.
    ///
    /// Increments the existing edge's weight, or creates the edge with
    /// weight 1. Both ids must have come from [`ensure_vertex`](Self::ensure_vertex).
    pub(crate) fn record_adjacency(&mut self, from: VertexId, to: VertexId) {
        let edges = &mut self.adjacency[from];
        if let Some(entry) = edges.iter_mut().find(|(target, _)| *target == to) {
            entry.1 += 1;
        } else {
            edges.push((to, 1));
            self.edge_count += 1;
        }
    }

    /// Look up the id of a word, if it is a vertex.
    pub(crate) fn id_of(&self, word: &str) -> Option<VertexId> {
        self.index.get(word).copied()
    }

    /// The word for a vertex id.
    pub(crate) fn word_of(&self, id: VertexId) -> &str {
        &self.vertices[id]
    }

    /// Out-edges of a vertex by id, in insertion order.
    pub(crate) fn outgoing_ids(&self, id: VertexId) -> &[(VertexId, u32)] {
        &self.adjacency[id]
    }

    /// Whether `word` is a vertex of the graph.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Whether a directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.weight(from, to).is_some()
    }

    /// The weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.id_of(from)?;
        let to = self.id_of(to)?;
        self.adjacency[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
    }

    /// Out-edges of `word` as `(target, weight)` pairs, in insertion order.
    ///
    /// Empty if `word` is not a vertex.
    pub fn outgoing<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.id_of(word)
            .into_iter()
            .flat_map(|id| self.adjacency[id].iter())
            .map(|&(target, weight)| (self.vertices[target].as_str(), weight))
    }

    /// Number of outgoing edges of `word` (0 if absent).
    pub fn out_degree(&self, word: &str) -> usize {
        self.id_of(word).map_or(0, |id| self.adjacency[id].len())
    }

    /// All vertex words in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
