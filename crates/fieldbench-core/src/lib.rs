//! Shared types for the es-field-bench toolchain.
//!
//! This crate provides the field catalog (which fields exist and which
//! candidate values each field can take), the index modeling mode, and the
//! index-creation payload builders used by both the corpus generator and the
//! bulk loader.
//!
//! # Example
//!
//! ```rust
//! use fieldbench_core::{FieldCatalog, IndexMode};
//!
//! let catalog = FieldCatalog::from_json_str(
//!     r#"{"status": ["ok", "warn", "error"], "region": ["eu", "us"]}"#,
//! ).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(IndexMode::Blob.term_path("status"), "data.status");
//! ```

pub mod catalog;
pub mod error;
pub mod mode;
pub mod payload;

pub use catalog::{FieldCatalog, FieldEntry};
pub use error::CatalogError;
pub use mode::IndexMode;
pub use payload::{index_creation_payload, IndexSettings};
