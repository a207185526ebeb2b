//! Index-creation payload construction.
//!
//! The first line of every corpus file is a self-contained payload carrying
//! the target index name, settings, and the mode-appropriate mappings, so the
//! bulk loader needs nothing but the corpus file to create the index.

use crate::catalog::FieldCatalog;
use crate::mode::{IndexMode, BLOB_ATTRIBUTE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Index settings written into the corpus header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSettings {
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            number_of_shards: 1,
            number_of_replicas: 1,
        }
    }
}

/// Build the index-creation payload for the given mode and catalog.
///
/// Typed mode declares `id` plus every catalog field as `keyword`; blob mode
/// declares only `id` as `keyword` and a single `flattened` data attribute.
/// Both disable dynamic field creation so the engine indexes exactly what the
/// mappings declare.
pub fn index_creation_payload(index_name: &str, mode: IndexMode, catalog: &FieldCatalog) -> Value {
    let mappings = match mode {
        IndexMode::Typed => {
            let mut properties = Map::new();
            properties.insert("id".to_string(), json!({"type": "keyword"}));
            for entry in catalog.iter() {
                properties.insert(entry.name.clone(), json!({"type": "keyword"}));
            }
            json!({
                "dynamic": false,
                "properties": properties,
            })
        }
        IndexMode::Blob => json!({
            "dynamic": false,
            "properties": {
                "id": {"type": "keyword"},
                (BLOB_ATTRIBUTE): {"type": "flattened"},
            },
        }),
    };

    json!({
        "index": index_name,
        "settings": IndexSettings::default(),
        "mappings": mappings,
    })
}
