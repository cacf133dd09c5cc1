//! Scoring and aggregation core for DealScope.
//!
//! Pure, deterministic functions over plain data: weight normalization,
//! metric coercion, baseline quality scoring, weighted score breakdowns, and
//! threshold-based strength/risk classification. No I/O, no hidden state.

mod classifier;
mod engine;
mod metric;
mod normalize;

pub use classifier::derive_strengths_risks;
pub use engine::{baseline_scores, ScoringEngine};
pub use metric::{coerce_metric, MetricValue};
pub use normalize::normalize_weights;
