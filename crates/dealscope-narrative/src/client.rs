//! HTTP client for the generative narrative backend.

use std::time::Duration;

use dealscope_analysis::{NarrativeGenerator, NoteKind};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::fallback::fallback_note;

/// Narrative generator backed by a JSON completion endpoint.
///
/// `POST {base}/generate` with prompt, context, and kind; expects
/// `{"text": "..."}`. Construct with [`NarrativeClient::offline`] to skip
/// the network entirely and always produce fallback notes.
pub struct NarrativeClient {
    endpoint: Option<Endpoint>,
}

struct Endpoint {
    client: Client,
    url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    context_chunks: &'a [String],
    kind: NoteKind,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

impl NarrativeClient {
    /// Client for a live endpoint. A `reqwest::Client` build failure is
    /// treated as being offline rather than an error, preserving the
    /// never-fail contract from construction onward.
    #[must_use]
    pub fn new(base_url: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dealscope/0.1 (startup-analysis)")
            .build();

        match client {
            Ok(client) => Self {
                endpoint: Some(Endpoint {
                    client,
                    url: format!("{}/generate", base_url.trim_end_matches('/')),
                    api_key,
                }),
            },
            Err(e) => {
                tracing::warn!(error = %e, "narrative HTTP client unavailable, using fallback notes");
                Self { endpoint: None }
            }
        }
    }

    /// Offline client: every note is the deterministic fallback.
    #[must_use]
    pub fn offline() -> Self {
        Self { endpoint: None }
    }

    async fn generate_live(
        endpoint: &Endpoint,
        prompt: &str,
        context_chunks: &[String],
        kind: NoteKind,
    ) -> Result<String, reqwest::Error> {
        let mut request = endpoint.client.post(&endpoint.url).json(&GenerateRequest {
            prompt,
            context_chunks,
            kind,
        });
        if let Some(key) = &endpoint.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        let parsed = response.json::<GenerateResponse>().await?;
        Ok(parsed.text)
    }
}

impl NarrativeGenerator for NarrativeClient {
    async fn generate(&self, prompt: &str, context_chunks: &[String], kind: NoteKind) -> String {
        let Some(endpoint) = &self.endpoint else {
            return fallback_note(prompt, context_chunks, kind);
        };

        match Self::generate_live(endpoint, prompt, context_chunks, kind).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(%kind, "narrative backend returned empty text, using fallback");
                fallback_note(prompt, context_chunks, kind)
            }
            Err(e) => {
                tracing::warn!(%kind, error = %e, "narrative generation failed, using fallback");
                fallback_note(prompt, context_chunks, kind)
            }
        }
    }
}
