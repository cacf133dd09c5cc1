use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_env_yields_full_defaults() {
    let map = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).expect("defaults should parse");

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.storage_dir, std::path::PathBuf::from("./storage"));
    assert_eq!(config.report_dir, std::path::PathBuf::from("./reports"));
    assert!(config.benchmark_api_url.is_none());
    assert!(config.narrative_api_url.is_none());
    assert_eq!(config.http_request_timeout_secs, 30);
    assert_eq!(config.http_max_retries, 3);
    assert_eq!(config.http_retry_backoff_base_ms, 500);
}

#[test]
fn explicit_values_override_defaults() {
    let mut map = HashMap::new();
    map.insert("DEALSCOPE_ENV", "production");
    map.insert("DEALSCOPE_BIND_ADDR", "127.0.0.1:8080");
    map.insert("DEALSCOPE_LOG_LEVEL", "debug");
    map.insert("DEALSCOPE_BENCHMARK_API_URL", "http://localhost:9000");
    map.insert("DEALSCOPE_HTTP_MAX_RETRIES", "5");

    let config = build_app_config(lookup_from_map(&map)).expect("should parse");

    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.benchmark_api_url.as_deref(),
        Some("http://localhost:9000")
    );
    assert_eq!(config.http_max_retries, 5);
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let mut map = HashMap::new();
    map.insert("DEALSCOPE_BIND_ADDR", "not-an-addr");

    let err = build_app_config(lookup_from_map(&map)).expect_err("should fail");
    assert!(matches!(err, crate::ConfigError::InvalidEnvVar { ref var, .. } if var == "DEALSCOPE_BIND_ADDR"));
}

#[test]
fn invalid_retry_count_is_rejected() {
    let mut map = HashMap::new();
    map.insert("DEALSCOPE_HTTP_MAX_RETRIES", "many");

    let err = build_app_config(lookup_from_map(&map)).expect_err("should fail");
    assert!(matches!(err, crate::ConfigError::InvalidEnvVar { ref var, .. } if var == "DEALSCOPE_HTTP_MAX_RETRIES"));
}

#[test]
fn unknown_environment_falls_back_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn debug_redacts_narrative_api_key() {
    let mut map = HashMap::new();
    map.insert("DEALSCOPE_NARRATIVE_API_KEY", "super-secret");

    let config = build_app_config(lookup_from_map(&map)).expect("should parse");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
