//! Tagged coercion of raw metric values.
//!
//! Startup metrics arrive as arbitrary JSON: numbers, numeric strings,
//! or garbage. Coercion never fails across the boundary — a value that
//! cannot become a number is reported as [`MetricValue::Fallback`] and the
//! caller substitutes its dimension-specific constant.

use serde_json::Value;

/// Result of attempting to read a metric as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// The value coerced cleanly to a float.
    Number(f64),
    /// Missing, null, or malformed; use the caller's fallback constant.
    Fallback,
}

impl MetricValue {
    /// Returns the coerced number, or `fallback` if coercion failed.
    #[must_use]
    pub fn unwrap_or(self, fallback: f64) -> f64 {
        match self {
            MetricValue::Number(n) => n,
            MetricValue::Fallback => fallback,
        }
    }
}

/// Coerces an optional JSON value to a number.
///
/// JSON numbers and strings that parse as floats coerce; everything else
/// (absent, null, bool, array, object, non-numeric string) is `Fallback`.
#[must_use]
pub fn coerce_metric(value: Option<&Value>) -> MetricValue {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(MetricValue::Fallback, MetricValue::Number),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_or(MetricValue::Fallback, MetricValue::Number),
        _ => MetricValue::Fallback,
    }
}
