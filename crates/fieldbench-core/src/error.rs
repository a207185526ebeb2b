//! Error types for catalog loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating a field catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error reading the catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid JSON object of string arrays.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog declares no fields at all.
    #[error("Field catalog is empty")]
    EmptyFieldSet,

    /// A field declares no candidate values.
    #[error("Field '{field}' has an empty value set")]
    EmptyValueSet { field: String },

    /// The same field name appears more than once.
    #[error("Duplicate field name: '{field}'")]
    DuplicateField { field: String },
}
