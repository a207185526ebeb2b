//! Bulk corpus file writer.

use crate::error::CorpusError;
use crate::synthesizer::DocumentSynthesizer;
use fieldbench_core::{index_creation_payload, FieldCatalog, IndexMode};
use serde_json::json;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for corpus writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a corpus generation run.
#[derive(Debug, Clone, Default)]
pub struct CorpusMetrics {
    /// Number of documents written.
    pub docs_written: u64,
    /// Total lines in the output file (header + 2 per document).
    pub lines_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent synthesizing documents.
    pub generation_duration: Duration,
    /// Time spent serializing and writing.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl CorpusMetrics {
    /// Calculate documents per second.
    pub fn docs_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.docs_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes a complete bulk corpus file for one mode.
///
/// The output is line-delimited JSON: line 1 is the index-creation payload,
/// then one action line and one document line per document, in sequence
/// order. After writing, the file's line count is verified against
/// `1 + 2 * doc_count`; a mismatch is fatal.
pub struct CorpusWriter {
    catalog: FieldCatalog,
    mode: IndexMode,
    index_name: String,
    base_seed: u64,
}

impl CorpusWriter {
    /// Create a corpus writer for a catalog, mode, and target index.
    pub fn new(
        catalog: FieldCatalog,
        mode: IndexMode,
        index_name: &str,
        base_seed: u64,
    ) -> Self {
        Self {
            catalog,
            mode,
            index_name: index_name.to_string(),
            base_seed,
        }
    }

    /// Generate `doc_count` documents and write the corpus file.
    pub fn write<P: AsRef<Path>>(
        &self,
        output_path: P,
        doc_count: u64,
    ) -> Result<CorpusMetrics, CorpusError> {
        let start_time = Instant::now();
        let mut metrics = CorpusMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating {} corpus '{}' with {} documents for index '{}'",
            self.mode,
            output_path.display(),
            doc_count,
            self.index_name
        );

        let mut synthesizer =
            DocumentSynthesizer::new(&self.catalog, self.mode, self.base_seed)?;

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        // Header line: index-creation payload.
        let payload = index_creation_payload(&self.index_name, self.mode, &self.catalog);
        serde_json::to_writer(&mut writer, &payload)?;
        writeln!(writer)?;
        metrics.lines_written += 1;

        for _ in 0..doc_count {
            let gen_start = Instant::now();
            let doc = synthesizer.next_document();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            let action = json!({"index": {"_index": self.index_name, "_id": doc.id}});
            serde_json::to_writer(&mut writer, &action)?;
            writeln!(writer)?;
            serde_json::to_writer(&mut writer, &doc.body)?;
            writeln!(writer)?;
            write_time += write_start.elapsed();

            metrics.docs_written += 1;
            metrics.lines_written += 2;

            if metrics.docs_written % 10000 == 0 {
                debug!("Written {} documents", metrics.docs_written);
            }
        }

        writer.flush()?;
        drop(writer);

        self.verify_line_count(output_path, doc_count)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Corpus complete: {} documents, {} lines, {} bytes in {:?} ({:.2} docs/sec)",
            metrics.docs_written,
            metrics.lines_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.docs_per_second()
        );

        Ok(metrics)
    }

    /// Re-read the written file and check the `1 + 2 * doc_count` invariant.
    fn verify_line_count(&self, path: &Path, doc_count: u64) -> Result<(), CorpusError> {
        let reader = BufReader::new(File::open(path)?);
        let actual = reader
            .lines()
            .try_fold(0u64, |count, line| line.map(|_| count + 1))?;
        let expected = 1 + 2 * doc_count;

        if actual != expected {
            return Err(CorpusError::LineCountMismatch { expected, actual });
        }
        Ok(())
    }
}
