//! Error types for the benchmark runner.

use thiserror::Error;

/// Errors that can occur while running a query benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// IO error reading the query set or writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The query-set file is not a valid JSON array of queries.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction or connection error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The query-set file contains no queries.
    #[error("Query set is empty: nothing to benchmark")]
    EmptyQuerySet,

    /// A worker task panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    Worker(String),
}
