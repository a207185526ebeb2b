//! Deterministic skewed value sampling.
//!
//! This crate is the statistical core of es-field-bench. It assigns a fixed
//! top-heavy probability to each rank of a field's value set, and draws
//! values from per-field seeded generators so that runs are exactly
//! reproducible and the document and query generators see identical
//! per-field draw sequences.
//!
//! # Architecture
//!
//! ```text
//! rank_weights(K)
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │ SeededCategoricalSampler │   one per field
//! │  - values (rank order)   │
//! │  - weights               │
//! │  - rng (StdRng, seeded)  │
//! └────────────┬─────────────┘
//!              │
//!              ▼
//!       FieldPopulation { name, sampler }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fieldbench_core::FieldCatalog;
//! use fieldbench_sampler::FieldPopulation;
//!
//! let catalog = FieldCatalog::from_json_str(
//!     r#"{"status": ["ok", "warn", "error", "fatal", "debug"]}"#,
//! ).unwrap();
//!
//! let mut populations = FieldPopulation::build_all(&catalog, 42).unwrap();
//! let value = populations[0].sample().to_string();
//! assert!(["ok", "warn", "error", "fatal", "debug"].contains(&value.as_str()));
//! ```

pub mod error;
pub mod population;
pub mod sampler;
pub mod seed;
pub mod weights;

pub use error::SamplerError;
pub use population::FieldPopulation;
pub use sampler::SeededCategoricalSampler;
pub use seed::{field_seed, fnv1a_64};
pub use weights::rank_weights;
