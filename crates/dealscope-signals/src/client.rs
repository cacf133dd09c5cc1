//! HTTP client for the benchmark/signal API.
//!
//! A small JSON service: `GET /benchmarks?sector=...` returns sector
//! averages, `GET /signals?name=...` returns recent news-like items. The
//! client surfaces typed errors; degradation to heuristics lives in
//! [`crate::HttpBenchmarkProvider`], not here.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SignalsError;

/// Client for the benchmark/signal REST API.
///
/// Use [`SignalsClient::new`] in production or point `base_url` at a mock
/// server in tests.
#[derive(Debug)]
pub struct SignalsClient {
    client: Client,
    base_url: Url,
}

/// One news-like item as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalRow {
    pub source: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct BenchmarksResponse {
    benchmarks: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct SignalsResponse {
    signals: Vec<SignalRow>,
}

impl SignalsClient {
    /// Creates a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SignalsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SignalsError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SignalsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dealscope/0.1 (startup-analysis)")
            .build()?;

        // Normalise: exactly one trailing slash so joins hit the root path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| SignalsError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self { client, base_url })
    }

    /// Fetches sector benchmark averages.
    ///
    /// # Errors
    ///
    /// - [`SignalsError::Http`] on network failure or non-2xx status.
    /// - [`SignalsError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_benchmarks(&self, sector: &str) -> Result<HashMap<String, f64>, SignalsError> {
        let url = self.build_url("benchmarks", &[("sector", sector)]);
        let body = self.request_json(&url).await?;
        let parsed: BenchmarksResponse =
            serde_json::from_value(body).map_err(|source| SignalsError::Deserialize {
                context: format!("benchmarks(sector={sector})"),
                source,
            })?;
        Ok(parsed.benchmarks)
    }

    /// Fetches recent public signals for a startup name.
    ///
    /// # Errors
    ///
    /// - [`SignalsError::Http`] on network failure or non-2xx status.
    /// - [`SignalsError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_signals(&self, name: &str) -> Result<Vec<SignalRow>, SignalsError> {
        let url = self.build_url("signals", &[("name", name)]);
        let body = self.request_json(&url).await?;
        let parsed: SignalsResponse =
            serde_json::from_value(body).map_err(|source| SignalsError::Deserialize {
                context: format!("signals(name={name})"),
                source,
            })?;
        Ok(parsed.signals)
    }

    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut().extend_pairs(params);
        url
    }

    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SignalsError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json::<serde_json::Value>().await?)
    }
}
