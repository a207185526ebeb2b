//! CLI argument definitions for the bulk loader.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `load` command.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Elasticsearch base URL
    #[arg(long, default_value = "http://localhost:9200")]
    pub es_url: String,

    /// Corpus file produced by `generate-corpus`
    #[arg(long)]
    pub bulk_file: PathBuf,

    /// Number of documents per bulk request
    #[arg(long, default_value = "2000")]
    pub chunk_docs: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "120")]
    pub timeout_seconds: u64,

    /// Delete the index first if it already exists
    #[arg(long)]
    pub recreate: bool,

    /// Force a refresh after ingestion completes
    #[arg(long)]
    pub refresh: bool,

    /// Basic auth username (password read from ES_PASSWORD)
    #[arg(long, env = "ES_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
