//! Field catalog: the set of fields and their candidate values.

use crate::error::CatalogError;
use std::collections::HashSet;
use std::path::Path;

/// One field's name and its ordered candidate values.
///
/// The value order is significant: rank 1 (the hottest value under the
/// skewed distribution) is the first entry, rank 2 the second, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Field name, unique within the catalog.
    pub name: String,
    /// Candidate values in rank order. Never empty.
    pub values: Vec<String>,
}

/// The full field catalog for a generation run.
///
/// Loaded once from a JSON object file (`{"field": ["v1", "v2", ...], ...}`)
/// and immutable afterwards. Iteration order is the declared order of the
/// file, which both the document and query generators rely on for
/// reproducibility.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: Vec<FieldEntry>,
}

impl FieldCatalog {
    /// Build a catalog from pre-constructed entries, validating the
    /// catalog invariants (non-empty, unique names, non-empty value sets).
    pub fn from_entries(fields: Vec<FieldEntry>) -> Result<Self, CatalogError> {
        if fields.is_empty() {
            return Err(CatalogError::EmptyFieldSet);
        }

        let mut seen = HashSet::new();
        for entry in &fields {
            if !seen.insert(entry.name.clone()) {
                return Err(CatalogError::DuplicateField {
                    field: entry.name.clone(),
                });
            }
            if entry.values.is_empty() {
                return Err(CatalogError::EmptyValueSet {
                    field: entry.name.clone(),
                });
            }
        }

        Ok(Self { fields })
    }

    /// Load a catalog from a JSON object string.
    ///
    /// Field order follows the order of keys in the JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut fields = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let values: Vec<String> = serde_json::from_value(value)?;
            fields.push(FieldEntry { name, values });
        }

        Self::from_entries(fields)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of fields in the catalog.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog has no fields. Always false for a validated
    /// catalog, provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the fields in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.fields.iter()
    }

    /// Field names in declared order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }
}
