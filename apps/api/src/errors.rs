use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("resume corresponding to resume_id: {0} not found")]
    ResumeNotFound(Uuid),

    #[error("Extraction validation failed: {0}")]
    ExtractionValidation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Validation(e) => AppError::ExtractionValidation(e.to_string()),
            ExtractionError::Agent(e) => AppError::Llm(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ResumeNotFound(_) => {
                (StatusCode::BAD_REQUEST, "RESUME_NOT_FOUND", self.to_string())
            }
            AppError::ExtractionValidation(msg) => {
                tracing::error!("Extraction validation failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_VALIDATION_FAILED",
                    "The extracted job data did not match the expected schema".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred. Check server logs for details.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::schema::SchemaError;
    use crate::llm_client::LlmError;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            AppError::Validation("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ResumeNotFound(Uuid::nil()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("gone".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_resume_not_found_message_names_the_resume() {
        let id = Uuid::new_v4();
        assert_eq!(
            AppError::ResumeNotFound(id).to_string(),
            format!("resume corresponding to resume_id: {id} not found")
        );
    }

    #[test]
    fn test_extraction_errors_keep_their_kind() {
        let validation = AppError::from(ExtractionError::Validation(SchemaError::BlankField(
            "job_title",
        )));
        assert!(matches!(validation, AppError::ExtractionValidation(_)));

        let agent = AppError::from(ExtractionError::Agent(LlmError::EmptyContent));
        assert!(matches!(agent, AppError::Llm(_)));
        assert_eq!(
            agent.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
