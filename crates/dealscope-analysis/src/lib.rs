//! Analysis orchestration for DealScope.
//!
//! Defines the adapter contracts the pipeline depends on (document store,
//! benchmark provider, narrative generator, artifact generator) and the
//! [`AnalysisPipeline`] that sequences one analysis run end to end. Adapters
//! are injected explicitly; there are no process-wide singletons.

mod adapters;
mod note;
mod pipeline;
mod request;

use thiserror::Error;

pub use adapters::{ArtifactGenerator, BenchmarkProvider, DocumentStore, NarrativeGenerator};
pub use note::NoteKind;
pub use pipeline::AnalysisPipeline;
pub use request::AnalysisRequest;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// None of the requested document ids resolved to a known document.
    /// The only caller-visible failure; raised before any scoring work.
    #[error("no documents available for analysis")]
    NoDocumentsAvailable,
}
