//! Error types for bulk loading.

use thiserror::Error;

/// Errors that can occur while bulk loading a corpus.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error reading the corpus file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error in the corpus file or an engine response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The corpus file has no header line.
    #[error("Corpus file is missing the index-creation header line")]
    MissingHeader,

    /// An action line has no matching document line.
    #[error("Malformed corpus file: action line {line} has no document line")]
    MalformedCorpusFile { line: u64 },

    /// The engine rejected an index management request.
    #[error("Index request failed with status {status}: {body}")]
    IndexRequest { status: u16, body: String },
}
