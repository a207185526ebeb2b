//! Bulk ingestion of generated corpora into Elasticsearch.
//!
//! Reads a corpus file produced by the corpus generator, creates the index
//! from the embedded header payload, and pushes the action/document pairs
//! through the `_bulk` API in fixed-size chunks while measuring ingestion
//! wall time. Auto-refresh is disabled for the duration of the upload and
//! always restored, including on failure paths.
//!
//! # Example
//!
//! ```ignore
//! use fieldbench_loader::{BulkLoader, LoadArgs};
//!
//! let loader = BulkLoader::new(&args)?;
//! let result = loader.run().await?;
//! println!("{:.2} docs/sec", result.docs_per_second());
//! ```

pub mod args;
pub mod corpus_file;
pub mod error;
pub mod loader;

pub use args::LoadArgs;
pub use corpus_file::{CorpusFile, CorpusHeader};
pub use error::LoaderError;
pub use loader::{BulkLoader, IngestionResult};
