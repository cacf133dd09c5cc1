//! Investor focus-weight normalization.

use std::collections::HashMap;

/// Normalizes raw focus weights into a probability-like distribution.
///
/// Each value is divided by the sum of all values, so the result sums to 1.0
/// for any input with a positive sum. A sum of zero or less (including an
/// empty mapping) degrades to all-zero weights instead of dividing by zero —
/// degenerate preferences are valid input, not an error. All original keys
/// are preserved, including zero-weighted ones.
///
/// Idempotent: normalizing an already-normalized mapping returns the same
/// mapping within floating-point tolerance.
#[must_use]
pub fn normalize_weights(weights: &HashMap<String, f64>) -> HashMap<String, f64> {
    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return weights.keys().map(|k| (k.clone(), 0.0)).collect();
    }
    weights
        .iter()
        .map(|(k, v)| (k.clone(), v / total))
        .collect()
}
