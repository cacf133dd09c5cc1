//! Degrading `BenchmarkProvider` implementation.

use std::collections::HashMap;

use dealscope_analysis::BenchmarkProvider;
use dealscope_core::PublicSignal;
use serde_json::json;

use crate::client::SignalsClient;
use crate::retry::retry_with_backoff;

/// Benchmark provider backed by the signals API, degrading to deterministic
/// heuristics whenever the service is unconfigured or a call fails.
///
/// From the pipeline's point of view this provider always succeeds; failures
/// are logged at `warn` and replaced with fallback values.
pub struct HttpBenchmarkProvider {
    client: Option<SignalsClient>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl HttpBenchmarkProvider {
    /// Provider backed by a live API endpoint.
    #[must_use]
    pub fn new(client: SignalsClient, max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            client: Some(client),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Offline provider: heuristic benchmarks and a placeholder signal only.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            client: None,
            max_retries: 0,
            backoff_base_ms: 0,
        }
    }
}

impl BenchmarkProvider for HttpBenchmarkProvider {
    async fn fetch_benchmarks(&self, sector: Option<&str>) -> HashMap<String, f64> {
        // No sector means no benchmarks, not a fallback.
        let Some(sector) = sector.filter(|s| !s.is_empty()) else {
            return HashMap::new();
        };

        let Some(client) = &self.client else {
            return heuristic_benchmarks();
        };

        match retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            client.fetch_benchmarks(sector)
        })
        .await
        {
            Ok(benchmarks) => benchmarks,
            Err(e) => {
                tracing::warn!(sector, error = %e, "benchmark fetch failed, using heuristics");
                heuristic_benchmarks()
            }
        }
    }

    async fn fetch_signals(&self, name: &str) -> Vec<PublicSignal> {
        let Some(client) = &self.client else {
            return placeholder_signals(name);
        };

        match retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            client.fetch_signals(name)
        })
        .await
        {
            Ok(rows) => rows
                .into_iter()
                .map(|row| PublicSignal {
                    metadata: HashMap::from([
                        ("source".to_string(), json!(row.source)),
                        ("title".to_string(), json!(row.title)),
                    ]),
                    source: row.source,
                    title: row.title,
                    summary: row.summary,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(name, error = %e, "signal fetch failed, using placeholder");
                placeholder_signals(name)
            }
        }
    }
}

/// Deterministic sector averages used when no live data is available.
fn heuristic_benchmarks() -> HashMap<String, f64> {
    HashMap::from([
        ("revenue_growth_pct".to_string(), 65.0),
        ("gross_margin_pct".to_string(), 48.0),
        ("team_size".to_string(), 35.0),
        ("customer_retention_pct".to_string(), 72.0),
    ])
}

/// Single simulated signal emitted when no live feed is available.
fn placeholder_signals(name: &str) -> Vec<PublicSignal> {
    vec![PublicSignal {
        source: "Crunchbase".to_string(),
        title: format!("{name} raises seed round"),
        summary: "Simulated funding activity. Connect a live signal feed for real data."
            .to_string(),
        metadata: HashMap::new(),
    }]
}
