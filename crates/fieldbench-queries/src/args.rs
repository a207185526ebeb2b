//! CLI argument definitions for query generation.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate-queries` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateQueriesArgs {
    /// Path to the field catalog JSON file
    #[arg(long)]
    pub fields_file: PathBuf,

    /// Name of the typed-mode index the typed query set targets
    #[arg(long)]
    pub typed_index: String,

    /// Name of the blob-mode index the blob query set targets
    #[arg(long)]
    pub blob_index: String,

    /// Number of query pairs to generate
    #[arg(long, default_value = "5000")]
    pub query_count: u64,

    /// Minimum number of filter predicates per query
    #[arg(long, default_value = "1")]
    pub min_filters: usize,

    /// Maximum number of filter predicates per query
    #[arg(long, default_value = "5")]
    pub max_filters: usize,

    /// Random seed for deterministic generation (must match the corpus seed
    /// for coherent selectivity)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output path for the typed query set
    #[arg(long)]
    pub output_typed: PathBuf,

    /// Output path for the blob query set
    #[arg(long)]
    pub output_blob: PathBuf,
}
