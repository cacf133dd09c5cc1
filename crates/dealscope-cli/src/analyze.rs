//! The `analyze` command: an offline end-to-end run of the pipeline.
//!
//! Documents are read from disk and ingested into an in-memory store, then
//! the pipeline runs with the offline adapters, so no external service is
//! required. Report artifacts land in `--report-dir`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde_json::{json, Value};

use dealscope_analysis::{AnalysisPipeline, AnalysisRequest};
use dealscope_ingest::{InMemoryDocumentStore, IngestionService};
use dealscope_narrative::NarrativeClient;
use dealscope_report::FileArtifactGenerator;
use dealscope_signals::HttpBenchmarkProvider;

#[derive(Debug, Args)]
pub(crate) struct AnalyzeArgs {
    /// Startup name used in scoring context and report headers.
    #[arg(long)]
    pub name: String,

    /// Document file to ingest before the run (repeatable).
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long)]
    pub sector: Option<String>,

    #[arg(long)]
    pub headquarters: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Raw metric as key=value, e.g. `--metric market_size_quality=0.8` (repeatable).
    #[arg(long = "metric")]
    pub metrics: Vec<String>,

    /// Focus weight as key=value, e.g. `--weight market=40` (repeatable).
    #[arg(long = "weight")]
    pub weights: Vec<String>,

    /// Free-form investor notes carried through to the result.
    #[arg(long)]
    pub notes: Option<String>,

    /// Directory where report artifacts are written.
    #[arg(long, default_value = "reports")]
    pub report_dir: PathBuf,

    /// Directory where ingested document copies are persisted.
    #[arg(long, default_value = "uploads")]
    pub storage_dir: PathBuf,
}

pub(crate) async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let focus_weights = parse_weights(&args.weights)?;
    let metrics = parse_metrics(&args.metrics)?;

    let store = Arc::new(InMemoryDocumentStore::new());
    let ingestion = IngestionService::new(args.storage_dir, Arc::clone(&store))?;

    let mut document_ids = Vec::new();
    for path in &args.files {
        let raw = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let filename = path.file_name().map_or_else(
            || "upload".to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let record = ingestion.save_upload(&filename, None, &raw)?;
        tracing::info!(id = %record.id, filename, "ingested document");
        document_ids.push(record.id);
    }

    let pipeline = AnalysisPipeline::new(
        HttpBenchmarkProvider::offline(),
        NarrativeClient::offline(),
        FileArtifactGenerator::new(args.report_dir)?,
    );

    let request = AnalysisRequest {
        document_ids,
        startup_name: args.name,
        sector: args.sector,
        headquarters: args.headquarters,
        description: args.description,
        metrics,
        focus_weights,
        notes: args.notes,
    };

    let result = pipeline.run(store.as_ref(), request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Parse repeated `key=value` flags where every value must be numeric.
fn parse_weights(pairs: &[String]) -> anyhow::Result<HashMap<String, f64>> {
    let mut weights = HashMap::new();
    for pair in pairs {
        let (key, value) = split_pair(pair)?;
        let parsed: f64 = value
            .parse()
            .map_err(|_| anyhow::anyhow!("weight '{key}' is not a number: '{value}'"))?;
        weights.insert(key.to_string(), parsed);
    }
    Ok(weights)
}

/// Parse repeated `key=value` metric flags. Numeric values become JSON
/// numbers so they score directly; everything else stays a string.
fn parse_metrics(pairs: &[String]) -> anyhow::Result<HashMap<String, Value>> {
    let mut metrics = HashMap::new();
    for pair in pairs {
        let (key, value) = split_pair(pair)?;
        let parsed = value
            .parse::<f64>()
            .map_or_else(|_| json!(value), |n| json!(n));
        metrics.insert(key.to_string(), parsed);
    }
    Ok(metrics)
}

fn split_pair(pair: &str) -> anyhow::Result<(&str, &str)> {
    pair.split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{pair}'"))
}
