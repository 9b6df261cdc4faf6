//! Error types of the fallible boundaries of this crate.
//!
//! Graph construction and all algorithms are infallible; only selecting an algorithm by name
//! and decoding input can fail.

use thiserror::Error;

/// Crate result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The algorithm name is not one of `dfs|bfs|cycle|dag|scc|ap|ep`.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The input is not a valid graph specification.
    #[error("Invalid graph specification: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
