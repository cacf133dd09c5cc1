//! Threshold-based strength/risk classification.

use std::collections::HashMap;

use dealscope_core::Dimension;
use serde_json::Value;

use crate::metric::coerce_metric;

/// Raw-metric score at or above this emits the dimension's strength statement.
const STRENGTH_THRESHOLD: f64 = 0.6;
/// Raw-metric score at or below this emits the dimension's risk statement.
const RISK_THRESHOLD: f64 = 0.4;
/// Neutral score assumed when a classifier metric is missing or malformed.
const CLASSIFIER_FALLBACK: f64 = 0.5;

/// Classifies raw startup metrics into strength and risk statements.
///
/// Operates on raw coerced values (no clamping), one metric per dimension in
/// the canonical dimension order. Scores in the open interval between the
/// thresholds emit neither statement, so a dimension contributes at most one
/// line and never both.
#[must_use]
pub fn derive_strengths_risks(metrics: &HashMap<String, Value>) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut risks = Vec::new();

    for dim in Dimension::ALL {
        let score = coerce_metric(metrics.get(dim.metric_key())).unwrap_or(CLASSIFIER_FALLBACK);
        if score >= STRENGTH_THRESHOLD {
            strengths.push(dim.strength_statement().to_string());
        } else if score <= RISK_THRESHOLD {
            risks.push(dim.risk_statement().to_string());
        }
    }

    (strengths, risks)
}
