//! es-field-bench library surface.
//!
//! Re-exports the workspace crates so integration tests and downstream
//! tooling can drive the full generate/load pipeline without going through
//! the CLI binary.
//!
//! # Pipeline
//!
//! ```text
//! fields.json ──> fieldbench_corpus::CorpusWriter ──> corpus.jsonl
//!            └──> fieldbench_queries::QuerySetWriter ──> queries-{typed,blob}.json
//! corpus.jsonl ──> fieldbench_loader::BulkLoader ──> live index + IngestionResult
//! queries-*.json ──> fieldbench_bench::QueryBenchmark ──> latency BenchResult
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate a typed-mode corpus
//! es-field-bench generate-corpus --mode typed --index-name bench-typed \
//!   --fields-file fields.json --doc-count 100000 --seed 42 -o corpus-typed.jsonl
//!
//! # Generate matching query sets for both modes
//! es-field-bench generate-queries --fields-file fields.json \
//!   --typed-index bench-typed --blob-index bench-blob \
//!   --output-typed queries-typed.json --output-blob queries-blob.json
//!
//! # Load a corpus and measure ingestion throughput
//! es-field-bench load --bulk-file corpus-typed.jsonl --recreate
//! ```

pub use fieldbench_bench as bench;
pub use fieldbench_core as core;
pub use fieldbench_corpus as corpus;
pub use fieldbench_loader as loader;
pub use fieldbench_queries as queries;
pub use fieldbench_sampler as sampler;
