//! # Lexigraph
//!
//! A directed, edge-weighted word-adjacency graph library for text analysis.
//!
//! Lexigraph ingests a plain-text document, builds a directed graph over the
//! distinct words it contains (an edge `a -> b` weighted by how often `b`
//! immediately follows `a`), and answers four kinds of questions about it:
//!
//! - Bridge-word lookup ([`query::bridge::BridgeWordFinder`])
//! - Bridge-word-assisted text generation ([`query::generate::TextGenerator`])
//! - Weighted shortest paths ([`query::path::PathFinder`])
//! - Random walks with cycle termination ([`query::walk::RandomWalker`])
//!
//! The graph is built once and read-only afterwards; all queries are safe to
//! run concurrently against a finished graph.
//!
//! ## Example
//!
//! ```
//! use lexigraph::prelude::*;
//!
//! let graph = build_from_text("the quick fox. the lazy fox")?;
//! let bridges = BridgeWordFinder::new(&graph).bridge_words("the", "fox")?;
//! assert!(bridges.contains("quick"));
//! assert!(bridges.contains("lazy"));
//! # Ok::<(), lexigraph::error::LexigraphError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod query;

use crate::error::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::store::WordGraph;

/// Build a word graph from an in-memory document with the default pipeline.
pub fn build_from_text(text: &str) -> Result<WordGraph> {
    GraphBuilder::new()?.build_from_text(text)
}

/// Commonly used types.
pub mod prelude {
    pub use crate::build_from_text;
    pub use crate::error::{LexigraphError, Result};
    pub use crate::graph::builder::GraphBuilder;
    pub use crate::graph::snapshot::{EdgeRecord, GraphSnapshot};
    pub use crate::graph::store::WordGraph;
    pub use crate::query::bridge::BridgeWordFinder;
    pub use crate::query::generate::TextGenerator;
    pub use crate::query::path::{PathFinder, ShortestPath};
    pub use crate::query::walk::{RandomWalker, Walk};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
