//! Index modeling mode: typed keyword fields vs. a single flattened blob.

use clap::ValueEnum;
use serde_json::{Map, Value};

/// The two document-modeling strategies under benchmark.
///
/// `Typed` maps every catalog field to its own exact-match `keyword`
/// attribute; `Blob` nests all field values under one `flattened` container
/// attribute named `data`. All mode-dependent shaping (documents, mappings,
/// query predicate paths) dispatches through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexMode {
    /// Explicit keyword field per catalog field.
    Typed,
    /// Single flattened `data` attribute holding all fields.
    Blob,
}

/// Container attribute name used by blob mode.
pub const BLOB_ATTRIBUTE: &str = "data";

impl IndexMode {
    /// Shape one document body from its identifier and the sampled
    /// field/value assignments (in catalog order).
    pub fn document(&self, id: &str, assignments: &[(String, String)]) -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("id".to_string(), Value::String(id.to_string()));

        match self {
            IndexMode::Typed => {
                for (field, value) in assignments {
                    doc.insert(field.clone(), Value::String(value.clone()));
                }
            }
            IndexMode::Blob => {
                let mut data = Map::new();
                for (field, value) in assignments {
                    data.insert(field.clone(), Value::String(value.clone()));
                }
                doc.insert(BLOB_ATTRIBUTE.to_string(), Value::Object(data));
            }
        }

        doc
    }

    /// The term-query path for a field under this mode.
    ///
    /// Typed mode filters on the bare field name; blob mode filters on the
    /// flattened sub-path `data.<field>`.
    pub fn term_path(&self, field: &str) -> String {
        match self {
            IndexMode::Typed => field.to_string(),
            IndexMode::Blob => format!("{BLOB_ATTRIBUTE}.{field}"),
        }
    }
}

impl std::fmt::Display for IndexMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexMode::Typed => write!(f, "typed"),
            IndexMode::Blob => write!(f, "blob"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments() -> Vec<(String, String)> {
        vec![
            ("status".to_string(), "ok".to_string()),
            ("region".to_string(), "eu".to_string()),
        ]
    }

    #[test]
    fn test_typed_document_is_flat() {
        let doc = IndexMode::Typed.document("doc-000001", &assignments());

        assert_eq!(doc.get("id").unwrap(), "doc-000001");
        assert_eq!(doc.get("status").unwrap(), "ok");
        assert_eq!(doc.get("region").unwrap(), "eu");
        assert!(doc.get(BLOB_ATTRIBUTE).is_none());
    }

    #[test]
    fn test_blob_document_nests_under_data() {
        let doc = IndexMode::Blob.document("doc-000001", &assignments());

        assert_eq!(doc.get("id").unwrap(), "doc-000001");
        assert!(doc.get("status").is_none());

        let data = doc.get(BLOB_ATTRIBUTE).unwrap().as_object().unwrap();
        assert_eq!(data.get("status").unwrap(), "ok");
        assert_eq!(data.get("region").unwrap(), "eu");
    }

    #[test]
    fn test_term_paths() {
        assert_eq!(IndexMode::Typed.term_path("status"), "status");
        assert_eq!(IndexMode::Blob.term_path("status"), "data.status");
    }
}
