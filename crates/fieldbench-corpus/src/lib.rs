//! Bulk corpus generation.
//!
//! This crate produces the line-delimited corpus files consumed by the bulk
//! loader: one index-creation header line followed by alternating bulk
//! action lines and document lines, with deterministic skewed field values.
//!
//! # Example
//!
//! ```ignore
//! use fieldbench_core::{FieldCatalog, IndexMode};
//! use fieldbench_corpus::CorpusWriter;
//!
//! let catalog = FieldCatalog::from_file("fields.json")?;
//! let writer = CorpusWriter::new(catalog, IndexMode::Typed, "bench-typed", 42)?;
//! let metrics = writer.write("corpus.jsonl", 100_000)?;
//! println!("{} docs in {:?}", metrics.docs_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod synthesizer;
pub mod writer;

pub use args::GenerateCorpusArgs;
pub use error::CorpusError;
pub use synthesizer::{Document, DocumentSynthesizer};
pub use writer::{CorpusMetrics, CorpusWriter};
