//! Narrative note generation for DealScope.
//!
//! [`NarrativeClient`] implements the pipeline's `NarrativeGenerator`
//! contract against a generative-text HTTP backend. The contract forbids
//! outward failure: any problem — no endpoint configured, network error,
//! unexpected body — degrades to a deterministic fallback note built from
//! the prompt and a context snippet, prefixed with a bracketed kind tag.

mod client;
mod fallback;

pub use client::NarrativeClient;
pub use fallback::fallback_note;
