//! Concurrent benchmark phases and latency statistics.

use crate::args::BenchArgs;
use crate::error::BenchError;
use fieldbench_queries::BenchQuery;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Final benchmark statistics, as persisted in the results JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    pub avg_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub p99_latency_ms: f64,
    pub throughput_req_sec: f64,
    pub success_count: u64,
    pub error_count: u64,
    pub error_rate: f64,
    pub elapsed_seconds: f64,
    pub warmup_requests: u64,
    pub benchmark_requests: u64,
}

impl BenchResult {
    /// Fold a timed phase's outcome into the reported statistics.
    fn compute(
        latencies_ms: &[f64],
        success_count: u64,
        error_count: u64,
        elapsed: Duration,
        warmup_requests: u64,
        benchmark_requests: u64,
    ) -> Self {
        let avg = if latencies_ms.is_empty() {
            0.0
        } else {
            latencies_ms.iter().sum::<f64>() / latencies_ms.len() as f64
        };

        let elapsed_seconds = elapsed.as_secs_f64();
        let throughput = if elapsed_seconds > 0.0 {
            success_count as f64 / elapsed_seconds
        } else {
            0.0
        };

        let total = success_count + error_count;
        let error_rate = if total > 0 {
            error_count as f64 / total as f64
        } else {
            0.0
        };

        Self {
            avg_latency_ms: avg,
            p95_latency_ms: percentile(latencies_ms, 95.0),
            p99_latency_ms: percentile(latencies_ms, 99.0),
            throughput_req_sec: throughput,
            success_count,
            error_count,
            error_rate,
            elapsed_seconds,
            warmup_requests,
            benchmark_requests,
        }
    }

    /// Write the results as pretty-printed JSON.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), BenchError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Human-readable summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "Requests: {} warmup, {} benchmark\n\
             Successes: {}\n\
             Errors: {} ({:.2}%)\n\
             Elapsed: {:.2}s\n\
             Throughput: {:.2} req/sec\n\
             Avg latency: {:.2} ms\n\
             p95 latency: {:.2} ms\n\
             p99 latency: {:.2} ms",
            self.warmup_requests,
            self.benchmark_requests,
            self.success_count,
            self.error_count,
            self.error_rate * 100.0,
            self.elapsed_seconds,
            self.throughput_req_sec,
            self.avg_latency_ms,
            self.p95_latency_ms,
            self.p99_latency_ms,
        )
    }
}

/// Nearest-rank percentile of a latency sample.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = ((sorted.len() as f64 * p / 100.0).ceil() as usize).clamp(1, sorted.len());
    sorted[idx - 1]
}

/// Outcome of one benchmark phase.
#[derive(Debug, Default)]
struct PhaseOutcome {
    latencies_ms: Vec<f64>,
    success_count: u64,
    error_count: u64,
}

/// Load a query-set file produced by the query generator.
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<BenchQuery>, BenchError> {
    let content = std::fs::read_to_string(path)?;
    let queries: Vec<BenchQuery> = serde_json::from_str(&content)?;
    if queries.is_empty() {
        return Err(BenchError::EmptyQuerySet);
    }
    Ok(queries)
}

/// Split a request budget across workers, front-loading the remainder.
fn split_requests(requests: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let base = requests / workers;
    let remainder = requests % workers;
    (0..workers)
        .map(|i| base + u64::from(i < remainder))
        .collect()
}

/// Replays a generated query set against a live index and measures latency.
///
/// A warmup phase runs first and its latencies are discarded, then the timed
/// phase runs the full request budget across the worker pool. Failed
/// requests (transport errors or non-2xx statuses) are counted, never
/// retried, and excluded from the latency sample.
pub struct QueryBenchmark {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
    queries: Arc<Vec<BenchQuery>>,
    concurrency: usize,
    warmup_requests: u64,
    total_requests: u64,
    seed: u64,
}

impl QueryBenchmark {
    /// Build a benchmark from CLI arguments, loading the query set eagerly.
    pub fn new(args: &BenchArgs) -> Result<Self, BenchError> {
        let queries = load_queries(&args.queries_file)?;
        info!(
            "Loaded {} queries from {}",
            queries.len(),
            args.queries_file.display()
        );

        let client = Client::builder()
            .timeout(Duration::from_millis(args.timeout_ms))
            .build()?;

        let credentials = match (&args.username, &args.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self {
            client,
            base_url: args.es_url.trim_end_matches('/').to_string(),
            credentials,
            queries: Arc::new(queries),
            concurrency: args.concurrency.max(1),
            warmup_requests: args.warmup_requests,
            total_requests: args.total_requests,
            seed: args.seed,
        })
    }

    /// Run warmup then the timed phase, returning the statistics.
    pub async fn run(&self) -> Result<BenchResult, BenchError> {
        // Worker seeds for both phases come from one master generator, so a
        // fixed seed and worker count reproduce the same request mix.
        let mut master = StdRng::seed_from_u64(self.seed);

        info!("Warmup phase: {} requests", self.warmup_requests);
        self.run_phase(self.warmup_requests, &mut master).await?;

        info!("Benchmark phase: {} requests", self.total_requests);
        let started = Instant::now();
        let outcome = self.run_phase(self.total_requests, &mut master).await?;
        let elapsed = started.elapsed();

        let result = BenchResult::compute(
            &outcome.latencies_ms,
            outcome.success_count,
            outcome.error_count,
            elapsed,
            self.warmup_requests,
            self.total_requests,
        );

        info!(
            "Benchmark complete: {} ok, {} failed in {:?} ({:.2} req/sec)",
            result.success_count, result.error_count, elapsed, result.throughput_req_sec
        );

        Ok(result)
    }

    /// Run one phase: spawn the worker pool, wait for every worker, and
    /// merge their outcomes.
    async fn run_phase(
        &self,
        requests: u64,
        master: &mut StdRng,
    ) -> Result<PhaseOutcome, BenchError> {
        let shares = split_requests(requests, self.concurrency);

        let mut handles = Vec::with_capacity(shares.len());
        for share in shares {
            let client = self.client.clone();
            let base_url = self.base_url.clone();
            let credentials = self.credentials.clone();
            let queries = Arc::clone(&self.queries);
            let worker_seed: u64 = master.gen();

            handles.push(tokio::spawn(async move {
                let mut rng = StdRng::seed_from_u64(worker_seed);
                let mut outcome = PhaseOutcome::default();

                for _ in 0..share {
                    let query = &queries[rng.gen_range(0..queries.len())];

                    let started = Instant::now();
                    let ok = send_query(&client, &base_url, &credentials, query).await;
                    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

                    if ok {
                        outcome.success_count += 1;
                        outcome.latencies_ms.push(latency_ms);
                    } else {
                        outcome.error_count += 1;
                    }
                }

                outcome
            }));
        }

        let mut merged = PhaseOutcome::default();
        for handle in handles {
            let outcome = handle
                .await
                .map_err(|e| BenchError::Worker(e.to_string()))?;
            merged.latencies_ms.extend(outcome.latencies_ms);
            merged.success_count += outcome.success_count;
            merged.error_count += outcome.error_count;
        }

        debug!(
            "Phase complete: {} ok, {} failed",
            merged.success_count, merged.error_count
        );
        Ok(merged)
    }
}

/// Send one search request; true on a 2xx response.
async fn send_query(
    client: &Client,
    base_url: &str,
    credentials: &Option<(String, String)>,
    query: &BenchQuery,
) -> bool {
    let mut request = client
        .post(format!("{base_url}/{}/_search", query.index))
        .json(&query.body);
    if let Some((user, pass)) = credentials {
        request = request.basic_auth(user, Some(pass));
    }

    match request.send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_percentile_empty_sample() {
        assert_eq!(percentile(&[], 95.0), 0.0);
    }

    #[test]
    fn test_percentile_nearest_rank() {
        let values: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        assert_eq!(percentile(&values, 95.0), 95.0);
        assert_eq!(percentile(&values, 99.0), 99.0);
        assert_eq!(percentile(&values, 100.0), 100.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.5], 99.0), 7.5);
    }

    #[test]
    fn test_percentile_ignores_input_order() {
        let values = vec![30.0, 10.0, 20.0];
        assert_eq!(percentile(&values, 50.0), 20.0);
    }

    #[test]
    fn test_split_requests_covers_budget() {
        let shares = split_requests(10, 4);
        assert_eq!(shares, vec![3, 3, 2, 2]);
        assert_eq!(shares.iter().sum::<u64>(), 10);

        assert_eq!(split_requests(5, 8).iter().sum::<u64>(), 5);
        assert_eq!(split_requests(0, 4).iter().sum::<u64>(), 0);
    }

    #[test]
    fn test_compute_result_statistics() {
        let latencies = vec![10.0, 20.0, 30.0, 40.0];
        let result =
            BenchResult::compute(&latencies, 4, 1, Duration::from_secs(2), 100, 5);

        assert_eq!(result.avg_latency_ms, 25.0);
        assert_eq!(result.throughput_req_sec, 2.0);
        assert_eq!(result.error_rate, 0.2);
        assert_eq!(result.warmup_requests, 100);
        assert_eq!(result.benchmark_requests, 5);
    }

    #[test]
    fn test_compute_result_with_no_successes() {
        let result = BenchResult::compute(&[], 0, 10, Duration::from_secs(1), 0, 10);
        assert_eq!(result.avg_latency_ms, 0.0);
        assert_eq!(result.throughput_req_sec, 0.0);
        assert_eq!(result.error_rate, 1.0);
    }

    #[test]
    fn test_load_queries_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"index": "bench-typed", "body": {{"track_total_hits": false,
                "query": {{"bool": {{"filter": [{{"term": {{"status": "ok"}}}}]}}}}}}}}]"#
        )
        .unwrap();

        let queries = load_queries(file.path()).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].index, "bench-typed");
        assert_eq!(queries[0].filter_count(), 1);
    }

    #[test]
    fn test_load_queries_rejects_empty_set() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(matches!(
            load_queries(file.path()),
            Err(BenchError::EmptyQuerySet)
        ));
    }

    #[test]
    fn test_results_file_roundtrip() {
        let result = BenchResult::compute(
            &[10.0, 20.0],
            2,
            0,
            Duration::from_secs(1),
            10,
            2,
        );

        let file = NamedTempFile::new().unwrap();
        result.write_to(file.path()).unwrap();

        let parsed: BenchResult =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(parsed.success_count, 2);
        assert_eq!(parsed.avg_latency_ms, 15.0);
    }
}
