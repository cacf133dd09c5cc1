use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparsable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparsable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
///
/// Every variable has a default; adapter URLs are optional on purpose — an
/// unset URL selects the offline/fallback adapter rather than failing startup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("DEALSCOPE_ENV", "development"));

    let bind_addr = parse_addr("DEALSCOPE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DEALSCOPE_LOG_LEVEL", "info");
    let storage_dir = PathBuf::from(or_default("DEALSCOPE_STORAGE_DIR", "./storage"));
    let report_dir = PathBuf::from(or_default("DEALSCOPE_REPORT_DIR", "./reports"));

    let benchmark_api_url = lookup("DEALSCOPE_BENCHMARK_API_URL").ok();
    let narrative_api_url = lookup("DEALSCOPE_NARRATIVE_API_URL").ok();
    let narrative_api_key = lookup("DEALSCOPE_NARRATIVE_API_KEY").ok();

    let http_request_timeout_secs = parse_u64("DEALSCOPE_HTTP_REQUEST_TIMEOUT_SECS", "30")?;
    let http_max_retries = parse_u32("DEALSCOPE_HTTP_MAX_RETRIES", "3")?;
    let http_retry_backoff_base_ms = parse_u64("DEALSCOPE_HTTP_RETRY_BACKOFF_BASE_MS", "500")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        storage_dir,
        report_dir,
        benchmark_api_url,
        narrative_api_url,
        narrative_api_key,
        http_request_timeout_secs,
        http_max_retries,
        http_retry_backoff_base_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
