//! Adapter contracts the pipeline depends on.
//!
//! Every adapter owns its degradation: benchmark, narrative, and artifact
//! calls always succeed from the pipeline's point of view, returning fallback
//! values internally when the backing service is unavailable. The pipeline
//! performs no retries of its own.

use std::collections::HashMap;
use std::future::Future;

use dealscope_core::{AnalysisResult, DocumentRecord, PublicSignal};
use uuid::Uuid;

use crate::NoteKind;

/// Shared, concurrently readable store of ingested documents.
pub trait DocumentStore: Send + Sync {
    /// Resolves ids to records, silently skipping unknown ids.
    fn get(&self, ids: &[Uuid]) -> Vec<DocumentRecord>;
}

/// Source of sector benchmarks and public signals.
pub trait BenchmarkProvider: Send + Sync {
    /// Returns sector averages; empty when the sector is unset or unknown.
    fn fetch_benchmarks(
        &self,
        sector: Option<&str>,
    ) -> impl Future<Output = HashMap<String, f64>> + Send;

    /// Returns news-like public signals for the startup name.
    fn fetch_signals(&self, name: &str) -> impl Future<Output = Vec<PublicSignal>> + Send;
}

/// Generative-text backend producing one narrative note per call.
///
/// Must never fail outward: implementations degrade to a deterministic
/// fallback string embedding the prompt and a context snippet, prefixed with
/// a bracketed kind tag.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        context_chunks: &[String],
        kind: NoteKind,
    ) -> impl Future<Output = String> + Send;
}

/// Turns a finished analysis into report artifacts.
///
/// Returns a label → location mapping with at least the `summary`,
/// `detailed`, and `founder` labels when writing succeeds; individual
/// failures are degraded inside the adapter, not surfaced.
pub trait ArtifactGenerator: Send + Sync {
    fn create_artifacts(
        &self,
        result: &AnalysisResult,
    ) -> impl Future<Output = HashMap<String, String>> + Send;
}
