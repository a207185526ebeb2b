//! Query-latency benchmark runner.
//!
//! Consumes a query-set file produced by the query generator and replays it
//! against a live index from a pool of concurrent workers: a warmup phase
//! whose latencies are discarded, then a timed phase reporting average,
//! p95, and p99 latency, throughput, and error rate. Each worker selects
//! queries with its own seeded generator, so a run's request mix is
//! reproducible for a fixed seed and worker count.
//!
//! # Example
//!
//! ```ignore
//! use fieldbench_bench::{BenchArgs, QueryBenchmark};
//!
//! let benchmark = QueryBenchmark::new(&args)?;
//! let result = benchmark.run().await?;
//! println!("p99: {:.2} ms", result.p99_latency_ms);
//! ```

pub mod args;
pub mod error;
pub mod runner;

pub use args::BenchArgs;
pub use error::BenchError;
pub use runner::{percentile, BenchResult, QueryBenchmark};
