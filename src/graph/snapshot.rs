//! Read-only graph export for presentation collaborators.
//!
//! A [`GraphSnapshot`] is a detached copy of the vertex and edge lists taken
//! after build completion. Renderers and other display surfaces consume it;
//! nothing flows back into the graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::store::WordGraph;

/// One directed edge of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source word.
    pub source: String,
    /// Target word.
    pub target: String,
    /// Observed adjacency count.
    pub weight: u32,
}

/// A detached, serializable copy of a graph's vertices and edges.
///
/// Both lists preserve the graph's insertion order, so repeated snapshots of
/// the same graph render identically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All vertex words.
    pub vertices: Vec<String>,
    /// All directed edges with weights.
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for GraphSnapshot {
    /// Renders an adjacency listing, one line per vertex:
    /// `vertex: target(weight) target(weight) ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{vertex}:")?;
            for edge in self.edges.iter().filter(|e| &e.source == vertex) {
                write!(f, " {}({})", edge.target, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl WordGraph {
    /// Take a read-only snapshot of the graph for display or export.
    pub fn snapshot(&self) -> GraphSnapshot {
        let vertices: Vec<String> = self.vertices().map(str::to_string).collect();
        let mut edges = Vec::with_capacity(self.edge_count());
        for vertex in self.vertices() {
            for (target, weight) in self.outgoing(vertex) {
                edges.push(EdgeRecord {
                    source: vertex.to_string(),
                    target: target.to_string(),
                    weight,
                });
            }
        }
        GraphSnapshot { vertices, edges }
    }
}
