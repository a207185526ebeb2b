//! Chunked bulk loader.

use crate::args::LoadArgs;
use crate::corpus_file::CorpusFile;
use crate::error::LoaderError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Maximum number of per-document failure bodies kept for reporting.
pub const ERROR_SAMPLE_LIMIT: usize = 5;

/// Outcome of a bulk ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestionResult {
    /// Target index name.
    pub index: String,
    /// Documents accepted by the engine.
    pub docs_indexed: u64,
    /// Documents the engine rejected.
    pub docs_failed: u64,
    /// Wall time of the chunked upload.
    pub elapsed: Duration,
    /// Up to [`ERROR_SAMPLE_LIMIT`] failure bodies for diagnostics.
    pub error_sample: Vec<String>,
}

impl IngestionResult {
    /// Whether every document was accepted.
    pub fn succeeded(&self) -> bool {
        self.docs_failed == 0
    }

    /// Ingestion throughput in documents per second.
    pub fn docs_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.docs_indexed as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Pushes a generated corpus into Elasticsearch over HTTP.
///
/// The loader reads the index definition from the corpus header, optionally
/// recreates the index, disables auto-refresh around the chunked `_bulk`
/// upload (restoring it on success and failure alike), and reports an
/// [`IngestionResult`]. Individual document failures are counted but never
/// abort the chunk sequence.
pub struct BulkLoader {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
    chunk_docs: usize,
    recreate: bool,
    refresh: bool,
}

impl BulkLoader {
    /// Build a loader from CLI arguments.
    pub fn new(args: &LoadArgs) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_seconds))
            .build()?;

        let credentials = match (&args.username, &args.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self {
            client,
            base_url: args.es_url.trim_end_matches('/').to_string(),
            credentials,
            chunk_docs: args.chunk_docs,
            recreate: args.recreate,
            refresh: args.refresh,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, format!("{}{path}", self.base_url));
        match &self.credentials {
            Some((user, pass)) => builder.basic_auth(user, Some(pass)),
            None => builder,
        }
    }

    /// Run the full load: create the index, ingest, measure.
    pub async fn run(&self, bulk_file: &std::path::Path) -> Result<IngestionResult, LoaderError> {
        let mut corpus = CorpusFile::open(bulk_file)?;
        let index = corpus.header().index.clone();

        let version = self.server_version().await?;
        info!("Connected to Elasticsearch {version}");

        if self.recreate {
            self.delete_index_if_exists(&index).await?;
        }
        self.create_index(&corpus).await?;

        let started = Instant::now();

        self.set_refresh_interval(&index, "-1").await?;
        debug!("Disabled refresh_interval for bulk ingest");

        // Restore the refresh interval no matter how ingestion ends.
        let ingest_result = self.ingest_chunks(&mut corpus).await;
        if let Err(e) = self.set_refresh_interval(&index, "1s").await {
            warn!("Failed to restore refresh_interval on '{index}': {e}");
        }
        let mut result = ingest_result?;

        result.index = index.clone();
        result.elapsed = started.elapsed();

        if self.refresh {
            self.refresh_index(&index).await?;
            info!("Refreshed index '{index}'");
        }

        info!(
            "Ingestion complete: {} indexed, {} failed in {:?} ({:.2} docs/sec)",
            result.docs_indexed,
            result.docs_failed,
            result.elapsed,
            result.docs_per_second()
        );

        Ok(result)
    }

    async fn server_version(&self) -> Result<String, LoaderError> {
        let response = self.request(Method::GET, "/").send().await?;
        let info = self.check(response).await?;
        let body: Value = serde_json::from_str(&info)?;
        Ok(body["version"]["number"]
            .as_str()
            .unwrap_or("unknown")
            .to_string())
    }

    async fn delete_index_if_exists(&self, index: &str) -> Result<(), LoaderError> {
        let response = self
            .request(Method::HEAD, &format!("/{index}"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        let response = self
            .request(Method::DELETE, &format!("/{index}"))
            .send()
            .await?;
        self.check(response).await?;
        info!("Deleted existing index '{index}'");
        Ok(())
    }

    async fn create_index(&self, corpus: &CorpusFile) -> Result<(), LoaderError> {
        let header = corpus.header();
        let body = json!({
            "settings": header.settings,
            "mappings": header.mappings,
        });

        let response = self
            .request(Method::PUT, &format!("/{}", header.index))
            .json(&body)
            .send()
            .await?;
        self.check(response).await?;
        info!("Created index '{}'", header.index);
        Ok(())
    }

    async fn set_refresh_interval(&self, index: &str, interval: &str) -> Result<(), LoaderError> {
        let response = self
            .request(Method::PUT, &format!("/{index}/_settings"))
            .json(&json!({"index.refresh_interval": interval}))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn refresh_index(&self, index: &str) -> Result<(), LoaderError> {
        let response = self
            .request(Method::POST, &format!("/{index}/_refresh"))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Stream the corpus through `_bulk` in chunks of `chunk_docs` documents.
    async fn ingest_chunks(&self, corpus: &mut CorpusFile) -> Result<IngestionResult, LoaderError> {
        let mut result = IngestionResult::default();
        let mut chunk = String::new();
        let mut chunk_len = 0usize;

        while let Some((action, document)) = corpus.next_pair()? {
            chunk.push_str(&action);
            chunk.push('\n');
            chunk.push_str(&document);
            chunk.push('\n');
            chunk_len += 1;

            if chunk_len >= self.chunk_docs {
                self.send_chunk(&chunk, &mut result).await?;
                chunk.clear();
                chunk_len = 0;
            }
        }

        if chunk_len > 0 {
            self.send_chunk(&chunk, &mut result).await?;
        }

        Ok(result)
    }

    async fn send_chunk(&self, body: &str, result: &mut IngestionResult) -> Result<(), LoaderError> {
        let response = self
            .request(Method::POST, "/_bulk")
            .header("Content-Type", "application/x-ndjson")
            .body(body.to_string())
            .send()
            .await?;
        let text = self.check(response).await?;
        let parsed: Value = serde_json::from_str(&text)?;

        tally_bulk_response(&parsed, result);
        debug!(
            "Chunk complete: {} indexed, {} failed so far",
            result.docs_indexed, result.docs_failed
        );
        Ok(())
    }

    async fn check(&self, response: reqwest::Response) -> Result<String, LoaderError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LoaderError::IndexRequest {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// Fold one `_bulk` response's per-item outcomes into the running result.
///
/// Failures are counted and a bounded sample of error bodies retained;
/// the chunk sequence continues regardless.
fn tally_bulk_response(response: &Value, result: &mut IngestionResult) {
    let items = match response.get("items").and_then(Value::as_array) {
        Some(items) => items,
        None => return,
    };

    for item in items {
        let outcome = item.get("index").unwrap_or(item);
        let status = outcome.get("status").and_then(Value::as_u64).unwrap_or(0);

        if (200..300).contains(&status) {
            result.docs_indexed += 1;
        } else {
            result.docs_failed += 1;
            if result.error_sample.len() < ERROR_SAMPLE_LIMIT {
                result.error_sample.push(outcome.to_string());
            }
        }
    }
}
