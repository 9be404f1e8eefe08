//! Axum route handlers for the Job API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::models::{JobIdQuery, JobResponse, JobUploadRequest, JobUploadResponse, RequestEcho};
use crate::jobs::service::{create_and_store_jobs, get_job_with_processed_data};
use crate::state::AppState;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

const ALLOWED_CONTENT_TYPES: &[&str] = &["application/json"];

/// POST /api/v1/job/upload
///
/// Stores each job description for an existing resume and extracts its
/// structured form. The body is read raw so the content type is checked
/// before anything else happens.
pub async fn handle_upload_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    check_content_type(&headers)?;

    let payload: JobUploadRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;
    let request_id = request_id(&headers);
    debug!("Job upload {request_id}: {} description(s)", payload.job_descriptions.len());

    let job_ids = create_and_store_jobs(state.store.as_ref(), &state.extractor, &payload).await?;

    Ok((
        [(X_REQUEST_ID, request_id.clone())],
        Json(JobUploadResponse {
            message: "data successfully processed".to_string(),
            job_id: job_ids,
            request: RequestEcho {
                request_id,
                payload,
            },
        }),
    ))
}

/// GET /api/v1/job?job_id=...
///
/// Returns the raw job merged with its structured extraction, if any.
pub async fn handle_get_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<JobIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) =
        query.map_err(|e| AppError::Validation(format!("Invalid query string: {e}")))?;
    let raw_id = params
        .job_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_id is required".to_string()))?;
    let job_id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| AppError::Validation(format!("job_id '{raw_id}' is not a valid UUID")))?;

    let request_id = request_id(&headers);
    let data = get_job_with_processed_data(state.store.as_ref(), job_id).await?;

    Ok((
        [(X_REQUEST_ID, request_id.clone())],
        Json(JobResponse { request_id, data }),
    ))
}

fn check_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .ok_or_else(|| AppError::Validation("Content-Type header is missing".to_string()))?;

    match content_type.to_str() {
        Ok(value) if ALLOWED_CONTENT_TYPES.contains(&value) => Ok(()),
        _ => Err(AppError::Validation(format!(
            "Invalid Content-Type. Only {} is/are allowed.",
            ALLOWED_CONTENT_TYPES.join(", ")
        ))),
    }
}

/// Caller-supplied `X-Request-ID`, or a fresh UUID.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
