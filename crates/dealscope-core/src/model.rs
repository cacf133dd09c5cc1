//! Plain-data types flowing through an analysis run.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::Dimension;

/// An ingested document. Immutable once created; retained in memory for the
/// lifetime of the ingestion service (no eviction — a known limitation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub extracted_text: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    pub uploaded_at: DateTime<Utc>,
}

/// Investor focus weights over dimension keys, of arbitrary scale.
///
/// Weights are normalized by the scoring engine at use time; keys outside the
/// fixed dimension vocabulary are carried but contribute nothing to the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorPreferences {
    pub focus_weights: HashMap<String, f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A third-party data point gathered for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSignal {
    pub source: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// A startup under analysis. Owned by a single run; `public_signals` is
/// populated by the orchestrator after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupProfile {
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Raw metric values keyed by metric name. Values may be numbers, numeric
    /// strings, or malformed; coercion happens in the scoring layer.
    #[serde(default)]
    pub metrics: HashMap<String, Value>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub public_signals: Vec<PublicSignal>,
}

/// Aggregate output of one analysis run.
///
/// Invariant: `total_score` equals the sum of `score_breakdown` values, and
/// the breakdown is keyed by exactly the six fixed dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub startup: StartupProfile,
    pub investor_preferences: InvestorPreferences,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub benchmarks: HashMap<String, f64>,
    pub score_breakdown: BTreeMap<Dimension, f64>,
    pub total_score: f64,
    pub summary_note: String,
    pub detailed_note: String,
    pub founder_profile_note: String,
    /// Report label → artifact location, attached after narrative generation.
    #[serde(default)]
    pub artifacts: HashMap<String, String>,
}
