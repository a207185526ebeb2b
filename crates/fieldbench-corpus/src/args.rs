//! CLI argument definitions for corpus generation.

use clap::Args;
use fieldbench_core::IndexMode;
use std::path::PathBuf;

/// Arguments for the `generate-corpus` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateCorpusArgs {
    /// Document modeling mode
    #[arg(long, value_enum)]
    pub mode: IndexMode,

    /// Target index name written into the corpus header and action lines
    #[arg(long)]
    pub index_name: String,

    /// Path to the field catalog JSON file
    #[arg(long)]
    pub fields_file: PathBuf,

    /// Number of documents to generate
    #[arg(long, default_value = "100000")]
    pub doc_count: u64,

    /// Random seed for deterministic generation (same seed = same corpus)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output corpus file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}
