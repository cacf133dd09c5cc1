use std::collections::{BTreeMap, HashMap};

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use dealscope_analysis::{AnalysisError, AnalysisRequest};
use dealscope_core::Dimension;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ReportArtifact {
    pub label: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalysisData {
    pub startup_name: String,
    pub total_score: f64,
    pub score_breakdown: BTreeMap<Dimension, f64>,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub benchmarks: HashMap<String, f64>,
    pub summary_note: String,
    pub detailed_note: String,
    pub founder_profile_note: String,
    pub artifacts: Vec<ReportArtifact>,
}

/// Runs one analysis over previously uploaded documents.
///
/// The only client-input failure is an unresolvable document-id set; every
/// other degenerate input produces a valid, if low-confidence, result.
pub(super) async fn run_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisData>>, ApiError> {
    let result = state
        .pipeline
        .run(state.store.as_ref(), request)
        .await
        .map_err(|e| match e {
            AnalysisError::NoDocumentsAvailable => ApiError::new(
                req_id.0.clone(),
                "no_documents",
                "no documents available for analysis",
            ),
        })?;

    let mut artifacts: Vec<ReportArtifact> = result
        .artifacts
        .into_iter()
        .map(|(label, location)| ReportArtifact { label, location })
        .collect();
    artifacts.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(Json(ApiResponse {
        data: AnalysisData {
            startup_name: result.startup.name,
            total_score: result.total_score,
            score_breakdown: result.score_breakdown,
            strengths: result.strengths,
            risks: result.risks,
            benchmarks: result.benchmarks,
            summary_note: result.summary_note,
            detailed_note: result.detailed_note,
            founder_profile_note: result.founder_profile_note,
            artifacts,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
