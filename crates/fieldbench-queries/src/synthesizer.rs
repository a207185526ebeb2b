//! Query synthesis from shared per-field populations.

use crate::error::QueryError;
use fieldbench_core::{FieldCatalog, IndexMode};
use fieldbench_sampler::FieldPopulation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Inclusive bounds on the number of filter predicates per query.
#[derive(Debug, Clone, Copy)]
pub struct FilterBounds {
    pub min: usize,
    pub max: usize,
}

impl FilterBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check the bounds against the number of available fields.
    fn validate(&self, available: usize) -> Result<(), QueryError> {
        if self.min > self.max || self.max > available {
            return Err(QueryError::InvalidFilterRange {
                min: self.min,
                max: self.max,
                available,
            });
        }
        Ok(())
    }
}

/// One filter-only benchmark query as persisted in the query set files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchQuery {
    /// Target index name.
    pub index: String,
    /// Search request body.
    pub body: QueryBody,
}

///// Search request body: filter-only, no hit counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryBody {
    pub track_total_hits: bool,
    pub query: BoolQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(rename = "bool")]
    pub bool_clause: FilterClause,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterClause {
    pub filter: Vec<Value>,
}

impl BenchQuery {
    fn new(index: &str, mode: IndexMode, predicates: &[(String, String)]) -> Self {
        let filter = predicates
            .iter()
            .map(|(field, value)| json!({"term": {(mode.term_path(field)): value}}))
            .collect();

        Self {
            index: index.to_string(),
            body: QueryBody {
                track_total_hits: false,
                query: BoolQuery {
                    bool_clause: FilterClause { filter },
                },
            },
        }
    }

    /// Number of filter predicates in this query.
    pub fn filter_count(&self) -> usize {
        self.body.query.bool_clause.filter.len()
    }
}

/// A typed/blob query pair sharing the same fields and sampled values.
#[derive(Debug, Clone)]
pub struct QueryPair {
    pub typed: BenchQuery,
    pub blob: BenchQuery,
}

/// Produces filter-only query pairs consistent with the generated corpus.
///
/// Field selection and filter counts come from a query-level generator seeded
/// with the base seed; predicate values come from the same per-field
/// populations the corpus generator uses, so query selectivity reflects the
/// corpus's skewed value distribution.
pub struct QuerySynthesizer {
    typed_index: String,
    blob_index: String,
    field_names: Vec<String>,
    populations: Vec<FieldPopulation>,
    bounds: FilterBounds,
    rng: StdRng,
}

impl QuerySynthesizer {
    /// Build a synthesizer over the catalog.
    ///
    /// Fails eagerly on an empty field set or unusable filter bounds.
    pub fn new(
        catalog: &FieldCatalog,
        typed_index: &str,
        blob_index: &str,
        bounds: FilterBounds,
        base_seed: u64,
    ) -> Result<Self, QueryError> {
        if catalog.is_empty() {
            return Err(QueryError::EmptyFieldSet);
        }
        bounds.validate(catalog.len())?;

        let populations = FieldPopulation::build_all(catalog, base_seed)?;
        let field_names = catalog.iter().map(|f| f.name.clone()).collect();

        Ok(Self {
            typed_index: typed_index.to_string(),
            blob_index: blob_index.to_string(),
            field_names,
            populations,
            bounds,
            rng: StdRng::seed_from_u64(base_seed),
        })
    }

    /// Synthesize the next query pair.
    ///
    /// Draws a filter count uniformly from the bounds, selects that many
    /// distinct fields without replacement, and samples one value per
    /// selected field from its shared sampler. Both queries of the pair are
    /// built from the same predicates.
    pub fn next_pair(&mut self) -> QueryPair {
        let num_filters = self.rng.gen_range(self.bounds.min..=self.bounds.max);
        let selected =
            rand::seq::index::sample(&mut self.rng, self.field_names.len(), num_filters);

        let predicates: Vec<(String, String)> = selected
            .iter()
            .map(|i| {
                let field = self.field_names[i].clone();
                let value = self.populations[i].sample().to_string();
                (field, value)
            })
            .collect();

        QueryPair {
            typed: BenchQuery::new(&self.typed_index, IndexMode::Typed, &predicates),
            blob: BenchQuery::new(&self.blob_index, IndexMode::Blob, &predicates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> FieldCatalog {
        FieldCatalog::from_json_str(
            r#"{
                "status": ["ok", "warn", "error"],
                "region": ["eu", "us", "ap"],
                "tier": ["free", "pro"],
                "env": ["prod", "staging", "dev"],
                "proto": ["http", "grpc"]
            }"#,
        )
        .unwrap()
    }

    fn synthesizer(min: usize, max: usize) -> QuerySynthesizer {
        QuerySynthesizer::new(
            &catalog(),
            "bench-typed",
            "bench-blob",
            FilterBounds::new(min, max),
            42,
        )
        .unwrap()
    }

    #[test]
    fn test_filter_counts_stay_in_bounds() {
        let mut synth = synthesizer(2, 4);
        for _ in 0..1_000 {
            let pair = synth.next_pair();
            assert!((2..=4).contains(&pair.typed.filter_count()));
            assert_eq!(pair.typed.filter_count(), pair.blob.filter_count());
        }
    }

    #[test]
    fn test_fields_within_query_are_distinct() {
        let mut synth = synthesizer(3, 5);
        for _ in 0..500 {
            let pair = synth.next_pair();
            let mut seen = HashSet::new();
            for term in &pair.typed.body.query.bool_clause.filter {
                let path = term["term"].as_object().unwrap().keys().next().unwrap();
                assert!(seen.insert(path.clone()), "duplicate field {path}");
            }
        }
    }

    #[test]
    fn test_pair_shares_fields_and_values() {
        let mut synth = synthesizer(1, 5);
        for _ in 0..500 {
            let pair = synth.next_pair();
            let typed_terms = &pair.typed.body.query.bool_clause.filter;
            let blob_terms = &pair.blob.body.query.bool_clause.filter;

            for (typed, blob) in typed_terms.iter().zip(blob_terms) {
                let (field, value) = typed["term"]
                    .as_object()
                    .unwrap()
                    .iter()
                    .next()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .unwrap();
                assert_eq!(blob["term"][format!("data.{field}")], value);
            }
        }
    }

    #[test]
    fn test_blob_paths_are_prefixed() {
        let mut synth = synthesizer(1, 3);
        let pair = synth.next_pair();
        for term in &pair.blob.body.query.bool_clause.filter {
            let path = term["term"].as_object().unwrap().keys().next().unwrap();
            assert!(path.starts_with("data."), "unprefixed path {path}");
        }
    }

    #[test]
    fn test_deterministic_pairs() {
        let mut a = synthesizer(1, 5);
        let mut b = synthesizer(1, 5);
        for _ in 0..200 {
            let pair_a = a.next_pair();
            let pair_b = b.next_pair();
            assert_eq!(
                serde_json::to_string(&pair_a.typed).unwrap(),
                serde_json::to_string(&pair_b.typed).unwrap()
            );
        }
    }

    #[test]
    fn test_invalid_filter_ranges_rejected() {
        let result = QuerySynthesizer::new(
            &catalog(),
            "t",
            "b",
            FilterBounds::new(4, 2),
            42,
        );
        assert!(matches!(
            result,
            Err(QueryError::InvalidFilterRange { min: 4, max: 2, .. })
        ));

        // max exceeds the number of catalog fields (5).
        let result = QuerySynthesizer::new(
            &catalog(),
            "t",
            "b",
            FilterBounds::new(1, 6),
            42,
        );
        assert!(matches!(
            result,
            Err(QueryError::InvalidFilterRange { available: 5, .. })
        ));
    }

    #[test]
    fn test_query_body_serializes_to_expected_shape() {
        let mut synth = synthesizer(1, 1);
        let pair = synth.next_pair();
        let json = serde_json::to_value(&pair.typed).unwrap();

        assert_eq!(json["index"], "bench-typed");
        assert_eq!(json["body"]["track_total_hits"], false);
        assert!(json["body"]["query"]["bool"]["filter"].is_array());
    }
}
