//! Directed weighted word-adjacency graph.
//!
//! [`store::WordGraph`] owns the vertex and edge sets,
//! [`builder::GraphBuilder`] populates one from a document, and
//! [`snapshot::GraphSnapshot`] is the read-only export surface for
//! presentation collaborators.

pub mod builder;
pub mod snapshot;
pub mod store;
