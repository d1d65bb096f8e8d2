//! Query operations over a built [`WordGraph`](crate::graph::store::WordGraph).
//!
//! All four operations are read-only and stateless between invocations; the
//! generator and walker carry only their random source.

pub mod bridge;
pub mod generate;
pub mod path;
pub mod walk;
