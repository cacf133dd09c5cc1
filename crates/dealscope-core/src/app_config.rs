use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory where raw uploaded documents are persisted.
    pub storage_dir: PathBuf,
    /// Directory where report artifacts are written.
    pub report_dir: PathBuf,
    /// Benchmark/signal API base URL; unset means offline heuristic mode.
    pub benchmark_api_url: Option<String>,
    /// Narrative generation API base URL; unset means deterministic fallback.
    pub narrative_api_url: Option<String>,
    pub narrative_api_key: Option<String>,
    pub http_request_timeout_secs: u64,
    pub http_max_retries: u32,
    pub http_retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("storage_dir", &self.storage_dir)
            .field("report_dir", &self.report_dir)
            .field("benchmark_api_url", &self.benchmark_api_url)
            .field("narrative_api_url", &self.narrative_api_url)
            .field(
                "narrative_api_key",
                &self.narrative_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("http_request_timeout_secs", &self.http_request_timeout_secs)
            .field("http_max_retries", &self.http_max_retries)
            .field(
                "http_retry_backoff_base_ms",
                &self.http_retry_backoff_base_ms,
            )
            .finish()
    }
}
