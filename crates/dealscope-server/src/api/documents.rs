use axum::{
    extract::{Multipart, State},
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct UploadData {
    pub document_ids: Vec<Uuid>,
}

/// Accepts a multipart upload of one or more documents, ingests each file,
/// and returns the assigned document ids in upload order.
pub(super) async fn upload_documents(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadData>>, ApiError> {
    let mut document_ids = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?
    {
        let filename = field
            .file_name()
            .map_or_else(|| "upload".to_string(), ToOwned::to_owned);
        let content_type = field.content_type().map(ToOwned::to_owned);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?;

        let record = state
            .ingestion
            .save_upload(&filename, content_type.as_deref(), &bytes)
            .map_err(|e| {
                tracing::error!(error = %e, filename, "document ingestion failed");
                ApiError::new(
                    req_id.0.clone(),
                    "internal_error",
                    "failed to ingest document",
                )
            })?;
        document_ids.push(record.id);
    }

    if document_ids.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "upload contained no files",
        ));
    }

    Ok(Json(ApiResponse {
        data: UploadData { document_ids },
        meta: ResponseMeta::new(req_id.0),
    }))
}
