//! Error types for the sampling core.

use thiserror::Error;

/// Errors that can occur while constructing samplers.
///
/// Both variants are configuration errors detected eagerly at construction
/// time; sampling itself never fails.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// A weight vector was requested for zero ranks.
    #[error("Invalid cardinality: rank weights require at least one rank")]
    InvalidCardinality,

    /// A sampler was constructed over an empty value set.
    #[error("Empty value set: a sampler requires at least one candidate value")]
    EmptyValueSet,
}
