//! Baseline scoring and the weighted scoring engine.

use std::collections::BTreeMap;

use dealscope_core::{Dimension, InvestorPreferences, StartupProfile};

use crate::metric::coerce_metric;
use crate::normalize::normalize_weights;

/// Derives the six baseline quality scores from a startup's raw metrics.
///
/// Each dimension reads its own metric key and substitutes its fallback
/// constant when the value is missing or malformed. Results are clamped to
/// at most 1.0; there is intentionally no lower clamp, so negative raw
/// values pass through unchanged. That asymmetry is long-standing observed
/// behavior and callers depend on it — do not "fix" it here.
#[must_use]
pub fn baseline_scores(startup: &StartupProfile) -> BTreeMap<Dimension, f64> {
    Dimension::ALL
        .into_iter()
        .map(|dim| {
            let raw = coerce_metric(startup.metrics.get(dim.metric_key()))
                .unwrap_or(dim.baseline_fallback());
            (dim, raw.min(1.0))
        })
        .collect()
}

/// Combines baseline scores with normalized investor weights.
///
/// Both operations are pure functions of their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Produces the per-dimension score breakdown.
    ///
    /// `breakdown[dim] = baseline[dim] * normalized_weight[dim.key()]`, with
    /// unweighted dimensions contributing 0.0. The breakdown always holds
    /// exactly the six fixed dimensions, regardless of which keys appear in
    /// the investor's weights or the startup's metrics.
    #[must_use]
    pub fn score(
        &self,
        startup: &StartupProfile,
        preferences: &InvestorPreferences,
    ) -> BTreeMap<Dimension, f64> {
        let normalized = normalize_weights(&preferences.focus_weights);
        let baselines = baseline_scores(startup);

        Dimension::ALL
            .into_iter()
            .map(|dim| {
                let base = baselines.get(&dim).copied().unwrap_or(0.5);
                let weight = normalized.get(dim.key()).copied().unwrap_or(0.0);
                (dim, base * weight)
            })
            .collect()
    }

    /// Sums a breakdown into the total score.
    #[must_use]
    pub fn total_score(&self, breakdown: &BTreeMap<Dimension, f64>) -> f64 {
        breakdown.values().sum()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
