//! Filter query set generation.
//!
//! Generates filter-only benchmark queries from the same per-field value
//! populations as the corpus generator, so query predicates draw from the
//! same skewed distributions as the indexed documents. Each synthesis step
//! emits a typed/blob pair sharing the selected fields and sampled values,
//! keeping the two modes on equivalent workloads.
//!
//! # Example
//!
//! ```ignore
//! use fieldbench_core::FieldCatalog;
//! use fieldbench_queries::{FilterBounds, QuerySynthesizer};
//!
//! let catalog = FieldCatalog::from_file("fields.json")?;
//! let bounds = FilterBounds::new(1, 5)?;
//! let mut synthesizer =
//!     QuerySynthesizer::new(&catalog, "bench-typed", "bench-blob", bounds, 42)?;
//! let pair = synthesizer.next_pair();
//! ```

pub mod args;
pub mod error;
pub mod synthesizer;
pub mod writer;

pub use args::GenerateQueriesArgs;
pub use error::QueryError;
pub use synthesizer::{BenchQuery, FilterBounds, QueryPair, QuerySynthesizer};
pub use writer::{QuerySetMetrics, QuerySetWriter};
