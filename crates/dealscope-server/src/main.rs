mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dealscope_analysis::AnalysisPipeline;
use dealscope_ingest::{IngestionService, InMemoryDocumentStore};
use dealscope_narrative::NarrativeClient;
use dealscope_report::FileArtifactGenerator;
use dealscope_signals::{HttpBenchmarkProvider, SignalsClient};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dealscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, addr = %config.bind_addr, "starting dealscope-server");

    let benchmarks = match &config.benchmark_api_url {
        Some(url) => {
            let client = SignalsClient::new(url, config.http_request_timeout_secs)?;
            HttpBenchmarkProvider::new(
                client,
                config.http_max_retries,
                config.http_retry_backoff_base_ms,
            )
        }
        None => {
            tracing::warn!("DEALSCOPE_BENCHMARK_API_URL not set; using heuristic benchmarks");
            HttpBenchmarkProvider::offline()
        }
    };

    let narrative = match &config.narrative_api_url {
        Some(url) => NarrativeClient::new(
            url,
            config.narrative_api_key.clone(),
            config.http_request_timeout_secs,
        ),
        None => {
            tracing::warn!("DEALSCOPE_NARRATIVE_API_URL not set; using fallback notes");
            NarrativeClient::offline()
        }
    };

    let artifacts = FileArtifactGenerator::new(config.report_dir.clone())?;
    let pipeline = Arc::new(AnalysisPipeline::new(benchmarks, narrative, artifacts));

    let store = Arc::new(InMemoryDocumentStore::new());
    let ingestion = Arc::new(IngestionService::new(
        config.storage_dir.clone(),
        Arc::clone(&store),
    )?);

    let app = build_app(AppState {
        store,
        ingestion,
        pipeline,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
