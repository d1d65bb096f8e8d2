//! Weighted shortest-path computation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::graph::store::{VertexId, WordGraph};

/// A minimum-total-weight path between two vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertex sequence from source to destination, inclusive.
    pub vertices: Vec<String>,
    /// Sum of the traversed edge weights.
    pub total_weight: u64,
}

/// Computes minimum-total-weight paths with Dijkstra's algorithm.
///
/// Edge weight is traversal cost: frequent adjacency makes an edge more
/// expensive, not cheaper. Ties between equal-cost paths are broken
/// arbitrarily.
///
/// # Examples
///
/// ```
/// use lexigraph::graph::builder::GraphBuilder;
/// use lexigraph::query::path::PathFinder;
///
/// let graph = GraphBuilder::new().unwrap().build_from_text("a b c").unwrap();
/// let path = PathFinder::new(&graph).shortest_path("a", "c").unwrap();
/// assert_eq!(path.vertices, vec!["a", "b", "c"]);
/// assert_eq!(path.total_weight, 2);
/// ```
pub struct PathFinder<'a> {
    graph: &'a WordGraph,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over the given graph.
    pub fn new(graph: &'a WordGraph) -> Self {
        PathFinder { graph }
    }

    /// The minimum-total-weight path from `word1` to `word2`.
    ///
    /// Fails with [`VertexAbsent`](LexigraphError::VertexAbsent) if an
    /// endpoint is unknown and [`NoPath`](LexigraphError::NoPath) if the
    /// destination is unreachable along directed edges. A query from a word
    /// to itself yields the single-vertex path with weight 0.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<ShortestPath> {
        let source = self.graph.id_of(word1);
        let target = self.graph.id_of(word2);
        let (Some(source), Some(target)) = (source, target) else {
            let missing: Vec<&str> = [(word1, source), (word2, target)]
                .into_iter()
                .filter_map(|(word, id)| id.is_none().then_some(word))
                .collect();
            return Err(LexigraphError::vertex_absent(missing));
        };

        let n = self.graph.vertex_count();
        let mut distance: Vec<Option<u64>> = vec![None; n];
        let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
        let mut frontier: BinaryHeap<Reverse<(u64, VertexId)>> = BinaryHeap::new();

        distance[source] = Some(0);
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((cost, vertex))) = frontier.pop() {
            if vertex == target {
                break;
            }
            if distance[vertex].is_some_and(|d| cost > d) {
                continue; // stale frontier entry
            }
            for &(next, weight) in self.graph.outgoing_ids(vertex) {
                let candidate = cost + u64::from(weight);
                if distance[next].is_none_or(|d| candidate < d) {
                    distance[next] = Some(candidate);
                    predecessor[next] = Some(vertex);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        let total_weight = distance[target]
            .ok_or_else(|| LexigraphError::no_path(word1, word2))?;

        let mut vertices = Vec::new();
        let mut current = target;
        vertices.push(self.graph.word_of(current).to_string());
        while current != source {
            current = predecessor[current].expect("reached vertices have predecessors");
            vertices.push(self.graph.word_of(current).to_string());
        }
        vertices.reverse();

        Ok(ShortestPath {
            vertices,
            total_weight,
        })
    }
}
