//! The fixed vocabulary of scoring dimensions.
//!
//! Every score breakdown is keyed by exactly these six dimensions, in this
//! order, regardless of which keys appear in investor weights or startup
//! metrics. Labels, metric keys, fallbacks, and strength/risk statements are
//! part of the product contract and are deliberately not configurable.

use serde::{Deserialize, Serialize};

/// One of the six fixed investment scoring dimensions.
///
/// Declaration order is the canonical emission order for breakdowns and
/// strength/risk statements; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Market,
    Team,
    Traction,
    Technology,
    Financials,
    Regulatory,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Market,
        Dimension::Team,
        Dimension::Traction,
        Dimension::Technology,
        Dimension::Financials,
        Dimension::Regulatory,
    ];

    /// Stable lowercase key used in weight mappings and wire payloads.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Market => "market",
            Dimension::Team => "team",
            Dimension::Traction => "traction",
            Dimension::Technology => "technology",
            Dimension::Financials => "financials",
            Dimension::Regulatory => "regulatory",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Market => "Market Size & Velocity",
            Dimension::Team => "Founder & Team Strength",
            Dimension::Traction => "Traction & Growth",
            Dimension::Technology => "Technology & Defensibility",
            Dimension::Financials => "Financial Quality",
            Dimension::Regulatory => "Regulatory Fit",
        }
    }

    /// Name of the startup metric this dimension reads.
    #[must_use]
    pub const fn metric_key(self) -> &'static str {
        match self {
            Dimension::Market => "market_size_quality",
            Dimension::Team => "team_strength",
            Dimension::Traction => "traction_velocity",
            Dimension::Technology => "technology_moat",
            Dimension::Financials => "financial_rigour",
            Dimension::Regulatory => "regulatory_readiness",
        }
    }

    /// Baseline score substituted when the metric is missing or malformed.
    #[must_use]
    pub const fn baseline_fallback(self) -> f64 {
        match self {
            Dimension::Market | Dimension::Team => 0.6,
            Dimension::Traction | Dimension::Technology | Dimension::Regulatory => 0.5,
            Dimension::Financials => 0.4,
        }
    }

    /// Fixed statement emitted when the raw metric clears the strength threshold.
    #[must_use]
    pub const fn strength_statement(self) -> &'static str {
        match self {
            Dimension::Market => "Large and well-defined market opportunity",
            Dimension::Team => "Seasoned founding team with complementary skills",
            Dimension::Traction => "Notable traction momentum",
            Dimension::Technology => "Defensible technology or IP position",
            Dimension::Financials => "Sound financial discipline",
            Dimension::Regulatory => "Clear regulatory pathway",
        }
    }

    /// Fixed statement emitted when the raw metric falls below the risk threshold.
    #[must_use]
    pub const fn risk_statement(self) -> &'static str {
        match self {
            Dimension::Market => "Market sizing needs validation",
            Dimension::Team => "Team depth appears thin",
            Dimension::Traction => "Limited traction data",
            Dimension::Technology => "Technology moat unclear",
            Dimension::Financials => "Financial projections unsubstantiated",
            Dimension::Regulatory => "Regulatory complexity requires attention",
        }
    }

    /// Parses a lowercase dimension key back into the enum.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
