//! Randomized graph traversal with cycle termination.

use ahash::AHashSet;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LexigraphError, Result};
use crate::graph::store::{VertexId, WordGraph};

/// The ordered vertex sequence visited by a random walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    /// Visited words in order. No word appears twice.
    pub vertices: Vec<String>,
}

impl Walk {
    /// The walk as whitespace-joined text, ready for an output sink.
    ///
    /// The core never writes files; callers persist this if they want to.
    pub fn to_text(&self) -> String {
        self.vertices.join(" ")
    }
}

/// Performs stochastic traversals of a graph.
///
/// A walk starts at a uniformly random vertex and repeatedly follows a
/// uniformly random outgoing edge. It stops at a dead end, or as soon as the
/// next vertex has already been visited (the revisited vertex is not
/// appended again).
///
/// # Examples
///
/// ```
/// use lexigraph::graph::builder::GraphBuilder;
/// use lexigraph::query::walk::RandomWalker;
///
/// let graph = GraphBuilder::new().unwrap().build_from_text("a b c").unwrap();
/// let walk = RandomWalker::with_seed(9).walk(&graph).unwrap();
/// assert!(!walk.vertices.is_empty());
/// ```
pub struct RandomWalker {
    rng: StdRng,
}

impl RandomWalker {
    /// Create a walker with an OS-seeded random source.
    pub fn new() -> Self {
        RandomWalker {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a walker with a fixed seed, for reproducible walks.
    pub fn with_seed(seed: u64) -> Self {
        RandomWalker {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Perform one random walk over `graph`.
    ///
    /// Fails with [`EmptyGraph`](LexigraphError::EmptyGraph) if the graph
    /// has no vertices.
    pub fn walk(&mut self, graph: &WordGraph) -> Result<Walk> {
        if graph.is_empty() {
            return Err(LexigraphError::EmptyGraph);
        }

        let mut current: VertexId = self.rng.random_range(0..graph.vertex_count());
        let mut visited: AHashSet<VertexId> = AHashSet::new();
        let mut vertices = vec![graph.word_of(current).to_string()];
        visited.insert(current);

        loop {
            let edges = graph.outgoing_ids(current);
            if edges.is_empty() {
                break;
            }

            let (next, _) = edges[self.rng.random_range(0..edges.len())];
            if visited.contains(&next) {
                // Cycle detected; the revisited vertex is not appended.
                break;
            }

            vertices.push(graph.word_of(next).to_string());
            visited.insert(next);
            current = next;
        }

        debug!("random walk visited {} vertices", vertices.len());

        Ok(Walk { vertices })
    }
}

impl Default for RandomWalker {
    fn default() -> Self {
        Self::new()
    }
}
