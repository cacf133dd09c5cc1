use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Everything one analysis run needs, as plain data.
///
/// Document ids are resolved against the store by the pipeline itself, so
/// unknown ids degrade silently and only a fully unresolvable set fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub document_ids: Vec<Uuid>,
    pub startup_name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw metric values; coercion and fallbacks happen in scoring.
    #[serde(default)]
    pub metrics: HashMap<String, Value>,
    pub focus_weights: HashMap<String, f64>,
    #[serde(default)]
    pub notes: Option<String>,
}
