//! Retry with exponential back-off and jitter for the signals client.

use std::future::Future;
use std::time::Duration;

use crate::error::SignalsError;

/// Returns `true` for errors worth retrying after a back-off delay.
///
/// Retriable: network-level failures (timeout, connect) and HTTP 5xx.
/// Not retriable: bad base URLs and malformed response bodies — repeating
/// the request won't fix either.
pub(crate) fn is_retriable(err: &SignalsError) -> bool {
    match err {
        SignalsError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        SignalsError::InvalidBaseUrl(_) | SignalsError::Deserialize { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on
/// transient errors. Delay doubles per attempt from `backoff_base_ms`,
/// jittered ±25%, capped at 30s. Non-retriable errors return immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, SignalsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SignalsError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "signals API transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deserialize_err() -> SignalsError {
        let source = serde_json::from_str::<()>("invalid").unwrap_err();
        SignalsError::Deserialize {
            context: "test".to_owned(),
            source,
        }
    }

    #[test]
    fn deserialize_errors_are_not_retriable() {
        assert!(!is_retriable(&deserialize_err()));
    }

    #[test]
    fn invalid_base_url_is_not_retriable() {
        assert!(!is_retriable(&SignalsError::InvalidBaseUrl("x".into())));
    }

    #[tokio::test]
    async fn non_retriable_error_returns_without_retry() {
        let mut calls = 0u32;
        let result: Result<(), _> = retry_with_backoff(3, 1, || {
            calls += 1;
            async { Err(deserialize_err()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn success_passes_through() {
        let result = retry_with_backoff(3, 1, || async { Ok(42u32) }).await;
        assert_eq!(result.expect("should succeed"), 42);
    }
}
