//! Document ingestion for DealScope.
//!
//! Persists uploaded document bytes, extracts plain text via an
//! extension-keyed extractor table, and retains records in an in-memory store
//! keyed by id. Records are immutable after creation and are never evicted —
//! a known limitation of the current design, not an oversight to patch here.

mod extract;
mod service;
mod store;

use thiserror::Error;

pub use extract::extract_text;
pub use service::IngestionService;
pub use store::InMemoryDocumentStore;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
