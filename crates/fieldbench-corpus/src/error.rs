//! Error types for corpus generation.

use thiserror::Error;

/// Errors that can occur while generating a corpus file.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Sampler construction error.
    #[error("Sampler error: {0}")]
    Sampler(#[from] fieldbench_sampler::SamplerError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The written file does not have the expected `1 + 2 * doc_count` lines.
    #[error("Corpus line count mismatch: expected {expected} lines, found {actual}")]
    LineCountMismatch { expected: u64, actual: u64 },
}
