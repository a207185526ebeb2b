//! Query set file writer.

use crate::error::QueryError;
use crate::synthesizer::{BenchQuery, QuerySynthesizer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics from a query set generation run.
#[derive(Debug, Clone, Default)]
pub struct QuerySetMetrics {
    /// Number of query pairs written (per-mode file length).
    pub queries_written: u64,
    /// Typed query file size in bytes.
    pub typed_file_size_bytes: u64,
    /// Blob query file size in bytes.
    pub blob_file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Writes both mode's query sets from one synthesizer pass.
///
/// Each output file is a pretty-printed JSON array of query objects; the
/// typed and blob files have the same length and entry `i` of each targets
/// the same fields and values.
pub struct QuerySetWriter;

impl QuerySetWriter {
    /// Generate `query_count` pairs and write both files.
    pub fn write<P: AsRef<Path>>(
        synthesizer: &mut QuerySynthesizer,
        query_count: u64,
        typed_path: P,
        blob_path: P,
    ) -> Result<QuerySetMetrics, QueryError> {
        let start_time = Instant::now();

        let mut typed_queries: Vec<BenchQuery> = Vec::with_capacity(query_count as usize);
        let mut blob_queries: Vec<BenchQuery> = Vec::with_capacity(query_count as usize);

        for _ in 0..query_count {
            let pair = synthesizer.next_pair();
            typed_queries.push(pair.typed);
            blob_queries.push(pair.blob);
        }

        let typed_path = typed_path.as_ref();
        let blob_path = blob_path.as_ref();

        Self::write_set(&typed_queries, typed_path)?;
        Self::write_set(&blob_queries, blob_path)?;

        let metrics = QuerySetMetrics {
            queries_written: query_count,
            typed_file_size_bytes: std::fs::metadata(typed_path)?.len(),
            blob_file_size_bytes: std::fs::metadata(blob_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "Query sets complete: {} pairs in {:?} ('{}' and '{}')",
            metrics.queries_written,
            metrics.total_duration,
            typed_path.display(),
            blob_path.display()
        );

        Ok(metrics)
    }

    fn write_set(queries: &[BenchQuery], path: &Path) -> Result<(), QueryError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, queries)?;
        writer.flush()?;
        Ok(())
    }
}
