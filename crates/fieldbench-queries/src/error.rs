//! Error types for query generation.

use thiserror::Error;

/// Errors that can occur while generating query sets.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Sampler construction error.
    #[error("Sampler error: {0}")]
    Sampler(#[from] fieldbench_sampler::SamplerError),

    /// The configured filter-count bounds are unusable.
    #[error(
        "Invalid filter range: min {min}, max {max} with {available} available fields"
    )]
    InvalidFilterRange {
        min: usize,
        max: usize,
        available: usize,
    },

    /// No fields exist to filter on.
    #[error("Empty field set: query generation requires at least one field")]
    EmptyFieldSet,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
