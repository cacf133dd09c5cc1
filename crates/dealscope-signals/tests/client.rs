//! Integration tests for `SignalsClient` and the degrading provider, using
//! wiremock HTTP mocks.

use dealscope_analysis::BenchmarkProvider;
use dealscope_signals::{HttpBenchmarkProvider, SignalsClient, SignalsError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SignalsClient {
    SignalsClient::new(base_url, 30).expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_benchmarks_parses_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "benchmarks": {
            "revenue_growth_pct": 81.5,
            "gross_margin_pct": 52.0
        }
    });

    Mock::given(method("GET"))
        .and(path("/benchmarks"))
        .and(query_param("sector", "fintech"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let benchmarks = client
        .fetch_benchmarks("fintech")
        .await
        .expect("should parse benchmarks");

    assert_eq!(benchmarks.get("revenue_growth_pct"), Some(&81.5));
    assert_eq!(benchmarks.get("gross_margin_pct"), Some(&52.0));
}

#[tokio::test]
async fn fetch_signals_parses_rows() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "signals": [
            {
                "source": "TechWire",
                "title": "Acme Robotics closes Series A",
                "summary": "Acme raised $12M led by Example Ventures."
            },
            {
                "source": "TradeDaily",
                "title": "Acme expands to Europe",
                "summary": "New Berlin office announced."
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/signals"))
        .and(query_param("name", "Acme Robotics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let signals = client
        .fetch_signals("Acme Robotics")
        .await
        .expect("should parse signals");

    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0].source, "TechWire");
    assert_eq!(signals[1].title, "Acme expands to Europe");
}

#[tokio::test]
async fn non_2xx_status_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benchmarks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_benchmarks("fintech")
        .await
        .expect_err("should fail");
    assert!(matches!(err, SignalsError::Http(_)));
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"rows": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_signals("Acme").await.expect_err("should fail");
    assert!(matches!(err, SignalsError::Deserialize { .. }));
}

#[tokio::test]
async fn provider_degrades_to_heuristics_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benchmarks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Zero retries keeps the test fast; degradation path is the same.
    let provider = HttpBenchmarkProvider::new(test_client(&server.uri()), 0, 1);
    let benchmarks = provider.fetch_benchmarks(Some("fintech")).await;

    assert_eq!(benchmarks.get("revenue_growth_pct"), Some(&65.0));
    assert_eq!(benchmarks.len(), 4);
}

#[tokio::test]
async fn provider_maps_live_signals() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "signals": [
            { "source": "TechWire", "title": "Acme in talks", "summary": "Rumored raise." }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/signals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let provider = HttpBenchmarkProvider::new(test_client(&server.uri()), 0, 1);
    let signals = provider.fetch_signals("Acme").await;

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].source, "TechWire");
    assert_eq!(signals[0].summary, "Rumored raise.");
    assert_eq!(
        signals[0].metadata.get("title").and_then(|v| v.as_str()),
        Some("Acme in talks")
    );
}

#[tokio::test]
async fn provider_degrades_to_placeholder_signal_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signals"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpBenchmarkProvider::new(test_client(&server.uri()), 0, 1);
    let signals = provider.fetch_signals("Acme").await;

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].source, "Crunchbase");
}
