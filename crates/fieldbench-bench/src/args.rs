//! CLI argument definitions for the benchmark runner.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `bench` command.
#[derive(Args, Clone, Debug)]
pub struct BenchArgs {
    /// Elasticsearch base URL
    #[arg(long, default_value = "http://localhost:9200")]
    pub es_url: String,

    /// Query-set file produced by `generate-queries`
    #[arg(long)]
    pub queries_file: PathBuf,

    /// Number of concurrent workers
    #[arg(long, default_value = "32")]
    pub concurrency: usize,

    /// Requests sent before measurement starts
    #[arg(long, default_value = "5000")]
    pub warmup_requests: u64,

    /// Requests sent during the measured phase
    #[arg(long, default_value = "100000")]
    pub total_requests: u64,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value = "2000")]
    pub timeout_ms: u64,

    /// Random seed for query selection
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output file for the results JSON
    #[arg(long, short = 'o', default_value = "results.json")]
    pub output: PathBuf,

    /// Basic auth username (password read from ES_PASSWORD)
    #[arg(long, env = "ES_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
