//! Benchmark and public-signal provider for DealScope.
//!
//! Wraps a JSON benchmark/news API behind [`SignalsClient`] (typed errors,
//! retry with back-off) and exposes [`HttpBenchmarkProvider`], a degrading
//! wrapper implementing the pipeline's `BenchmarkProvider` contract: it
//! always returns a value, falling back to deterministic heuristics when the
//! backing service is unconfigured or unreachable.

mod client;
mod error;
mod provider;
mod retry;

pub use client::SignalsClient;
pub use error::SignalsError;
pub use provider::HttpBenchmarkProvider;
