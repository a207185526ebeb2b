//! Command-line interface for es-field-bench
//!
//! # Usage Examples
//!
//! ## Corpus generation
//! ```bash
//! # Typed mode: every field is an explicit keyword attribute
//! es-field-bench generate-corpus --mode typed \
//!   --index-name bench-typed --fields-file fields.json \
//!   --doc-count 100000 --seed 42 --output corpus-typed.jsonl
//!
//! # Blob mode: all fields nested under one flattened attribute
//! es-field-bench generate-corpus --mode blob \
//!   --index-name bench-blob --fields-file fields.json \
//!   --doc-count 100000 --seed 42 --output corpus-blob.jsonl
//! ```
//!
//! ## Query generation
//! ```bash
//! # One pass emits matching typed and blob query sets
//! es-field-bench generate-queries --fields-file fields.json \
//!   --typed-index bench-typed --blob-index bench-blob \
//!   --query-count 5000 --min-filters 1 --max-filters 5 --seed 42 \
//!   --output-typed queries-typed.json --output-blob queries-blob.json
//! ```
//!
//! ## Bulk loading
//! ```bash
//! # Credentials are optional and read from ES_USERNAME / ES_PASSWORD
//! es-field-bench load --es-url http://localhost:9200 \
//!   --bulk-file corpus-typed.jsonl --chunk-docs 2000 --recreate --refresh
//! ```
//!
//! ## Benchmarking
//! ```bash
//! # Warmup then timed phase; statistics land in results JSON
//! es-field-bench bench --es-url http://localhost:9200 \
//!   --queries-file queries-typed.json --concurrency 32 \
//!   --warmup-requests 5000 --total-requests 100000 -o results-typed.json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fieldbench_bench::{BenchArgs, QueryBenchmark};
use fieldbench_core::FieldCatalog;
use fieldbench_corpus::{CorpusWriter, GenerateCorpusArgs};
use fieldbench_loader::{BulkLoader, LoadArgs};
use fieldbench_queries::{
    FilterBounds, GenerateQueriesArgs, QuerySetWriter, QuerySynthesizer,
};

#[derive(Parser)]
#[command(name = "es-field-bench")]
#[command(about = "Deterministic corpus and query generator for Elasticsearch field-modeling benchmarks")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bulk corpus file for one modeling mode
    GenerateCorpus(GenerateCorpusArgs),

    /// Generate matching typed and blob filter query sets
    GenerateQueries(GenerateQueriesArgs),

    /// Create the index from a corpus file and bulk load it, measuring throughput
    Load(LoadArgs),

    /// Replay a query set against a live index and report latency statistics
    Bench(BenchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateCorpus(args) => run_generate_corpus(args),
        Commands::GenerateQueries(args) => run_generate_queries(args),
        Commands::Load(args) => run_load(args).await,
        Commands::Bench(args) => run_bench(args).await,
    }
}

fn run_generate_corpus(args: GenerateCorpusArgs) -> anyhow::Result<()> {
    let catalog = FieldCatalog::from_file(&args.fields_file)
        .with_context(|| format!("Failed to load field catalog from {:?}", args.fields_file))?;

    let writer = CorpusWriter::new(catalog, args.mode, &args.index_name, args.seed);
    let metrics = writer
        .write(&args.output, args.doc_count)
        .with_context(|| format!("Failed to generate corpus {:?}", args.output))?;

    println!(
        "Generated {}: {} lines ({} docs, {} bytes) in {:.2?}",
        args.output.display(),
        metrics.lines_written,
        metrics.docs_written,
        metrics.file_size_bytes,
        metrics.total_duration,
    );
    Ok(())
}

fn run_generate_queries(args: GenerateQueriesArgs) -> anyhow::Result<()> {
    let catalog = FieldCatalog::from_file(&args.fields_file)
        .with_context(|| format!("Failed to load field catalog from {:?}", args.fields_file))?;

    let bounds = FilterBounds::new(args.min_filters, args.max_filters);
    let mut synthesizer = QuerySynthesizer::new(
        &catalog,
        &args.typed_index,
        &args.blob_index,
        bounds,
        args.seed,
    )?;

    let metrics = QuerySetWriter::write(
        &mut synthesizer,
        args.query_count,
        &args.output_typed,
        &args.output_blob,
    )
    .context("Failed to generate query sets")?;

    println!(
        "Generated {} and {}: {} query pairs with {}..{} filters in {:.2?}",
        args.output_typed.display(),
        args.output_blob.display(),
        metrics.queries_written,
        args.min_filters,
        args.max_filters,
        metrics.total_duration,
    );
    Ok(())
}

async fn run_load(args: LoadArgs) -> anyhow::Result<()> {
    let loader = BulkLoader::new(&args)?;
    let result = loader
        .run(&args.bulk_file)
        .await
        .with_context(|| format!("Failed to load corpus {:?}", args.bulk_file))?;

    println!("Index: {}", result.index);
    println!("Documents: {}", result.docs_indexed);
    println!("Time: {:.2}s", result.elapsed.as_secs_f64());
    println!("Throughput: {:.2} docs/sec", result.docs_per_second());

    if !result.succeeded() {
        eprintln!("{} document failures, sample:", result.docs_failed);
        for (i, err) in result.error_sample.iter().enumerate() {
            eprintln!("  [{}] {err}", i + 1);
        }
        anyhow::bail!("{} documents failed to index", result.docs_failed);
    }

    Ok(())
}

async fn run_bench(args: BenchArgs) -> anyhow::Result<()> {
    let benchmark = QueryBenchmark::new(&args)
        .with_context(|| format!("Failed to load query set {:?}", args.queries_file))?;
    let result = benchmark.run().await?;

    result
        .write_to(&args.output)
        .with_context(|| format!("Failed to write results {:?}", args.output))?;

    println!("{}", result.summary());
    println!("Results written to {}", args.output.display());
    Ok(())
}
