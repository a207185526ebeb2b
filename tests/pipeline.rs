//! End-to-end pipeline test: generate a corpus, then stream it back through
//! the loader's corpus reader the way the `load` command would.

use es_field_bench::core::{FieldCatalog, IndexMode};
use es_field_bench::corpus::CorpusWriter;
use es_field_bench::loader::CorpusFile;
use es_field_bench::queries::{FilterBounds, QuerySetWriter, QuerySynthesizer};
use serde_json::Value;
use tempfile::TempDir;

const SEED: u64 = 42;
const DOC_COUNT: u64 = 50; // Small scale for integration tests

fn catalog() -> FieldCatalog {
    FieldCatalog::from_json_str(
        r#"{
            "status": ["ok", "warn", "error", "fatal", "debug"],
            "region": ["eu", "us", "ap"],
            "tier": ["free", "pro"]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_corpus_roundtrips_through_loader_reader() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("corpus.jsonl");

    let metrics = CorpusWriter::new(catalog(), IndexMode::Blob, "bench-blob", SEED)
        .write(&path, DOC_COUNT)
        .unwrap();
    assert_eq!(metrics.lines_written, 1 + 2 * DOC_COUNT);

    let mut corpus = CorpusFile::open(&path).unwrap();
    assert_eq!(corpus.header().index, "bench-blob");
    assert_eq!(corpus.header().mappings["properties"]["data"]["type"], "flattened");

    let mut pairs = 0u64;
    while let Some((action, document)) = corpus.next_pair().unwrap() {
        pairs += 1;

        let action: Value = serde_json::from_str(&action).unwrap();
        let document: Value = serde_json::from_str(&document).unwrap();
        assert_eq!(action["index"]["_index"], "bench-blob");
        assert_eq!(action["index"]["_id"], document["id"]);
        assert_eq!(document["id"], format!("doc-{pairs:06}"));
    }
    assert_eq!(pairs, DOC_COUNT);
}

#[test]
fn test_corpus_and_queries_share_value_population() {
    let temp_dir = TempDir::new().unwrap();
    let corpus_path = temp_dir.path().join("corpus.jsonl");
    let typed_path = temp_dir.path().join("queries-typed.json");
    let blob_path = temp_dir.path().join("queries-blob.json");

    CorpusWriter::new(catalog(), IndexMode::Typed, "bench-typed", SEED)
        .write(&corpus_path, 500)
        .unwrap();

    let mut synthesizer = QuerySynthesizer::new(
        &catalog(),
        "bench-typed",
        "bench-blob",
        FilterBounds::new(1, 3),
        SEED,
    )
    .unwrap();
    QuerySetWriter::write(&mut synthesizer, 200, &typed_path, &blob_path).unwrap();

    // Every value a query filters on must exist in the generated corpus:
    // both sides draw from the same per-field skewed populations, and at
    // this corpus size every candidate value of these small fields appears.
    let corpus_text = std::fs::read_to_string(&corpus_path).unwrap();
    let queries: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&typed_path).unwrap()).unwrap();
    assert_eq!(queries.len(), 200);

    for query in &queries {
        for term in query["body"]["query"]["bool"]["filter"].as_array().unwrap() {
            let (field, value) = term["term"].as_object().unwrap().iter().next().unwrap();
            let needle = format!("\"{}\":{}", field, value);
            assert!(
                corpus_text.contains(&needle),
                "query predicate {needle} never appears in the corpus"
            );
        }
    }
}
