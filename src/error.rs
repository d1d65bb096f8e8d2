//! Error types for the lexigraph library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexigraphError`] enum. Query failures (`VertexAbsent`, `NoPath`,
//! `EmptyGraph`) are recoverable values the caller is expected to inspect;
//! `InputUnavailable` is fatal to graph construction and means no graph was
//! produced.
//!
//! # Examples
//!
//! ```
//! use lexigraph::error::{LexigraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexigraphError::analysis("invalid pattern"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors (reader failures, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document collaborator could not supply the source text.
    ///
    /// Fatal to construction; no partial graph is exposed.
    #[error("input unavailable: {0}")]
    InputUnavailable(String),

    /// One or more query endpoints are not vertices of the graph.
    ///
    /// `words` lists exactly the missing endpoint(s), so callers can tell
    /// which side of the query was unknown.
    #[error("no such word(s) in the graph: {}", words.join(", "))]
    VertexAbsent {
        /// The queried words that are absent from the vertex set.
        words: Vec<String>,
    },

    /// The destination is unreachable from the source along directed edges.
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Source word of the failed query.
        from: String,
        /// Destination word of the failed query.
        to: String,
    },

    /// The graph has no vertices, so a random walk cannot start.
    #[error("cannot walk an empty graph")]
    EmptyGraph,

    /// Analysis-related errors (tokenization, pattern compilation).
    #[error("analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LexigraphError`].
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Analysis(msg.into())
    }

    /// Create a new input-unavailable error.
    pub fn input_unavailable<S: Into<String>>(msg: S) -> Self {
        LexigraphError::InputUnavailable(msg.into())
    }

    /// Create a vertex-absent error for the given missing words.
    pub fn vertex_absent<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LexigraphError::VertexAbsent {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a no-path error.
    pub fn no_path<S: Into<String>>(from: S, to: S) -> Self {
        LexigraphError::NoPath {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexigraphError::analysis("bad pattern");
        assert_eq!(error.to_string(), "analysis error: bad pattern");

        let error = LexigraphError::input_unavailable("document missing");
        assert_eq!(error.to_string(), "input unavailable: document missing");

        let error = LexigraphError::no_path("alpha", "omega");
        assert_eq!(error.to_string(), "no path from alpha to omega");
    }

    #[test]
    fn test_vertex_absent_lists_missing_words() {
        let error = LexigraphError::vertex_absent(["zebra"]);
        assert_eq!(error.to_string(), "no such word(s) in the graph: zebra");

        let error = LexigraphError::vertex_absent(["zebra", "yak"]);
        assert_eq!(
            error.to_string(),
            "no such word(s) in the graph: zebra, yak"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = LexigraphError::from(io_error);

        match error {
            LexigraphError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
