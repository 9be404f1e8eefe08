use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::schema::{
    ApplicationInfo, CompanyProfile, CompensationAndBenefits, Qualifications,
};
use crate::models::job::{JobRow, ProcessedJobRow};

// ────────────────────────────────────────────────────────────────────────────
// Upload
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUploadRequest {
    pub resume_id: Uuid,
    pub job_descriptions: Vec<String>,
}

impl JobUploadRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_descriptions.is_empty() {
            return Err(AppError::Validation(
                "job_descriptions must contain at least one description".to_string(),
            ));
        }
        if let Some(index) = self
            .job_descriptions
            .iter()
            .position(|d| d.trim().is_empty())
        {
            return Err(AppError::Validation(format!(
                "job_descriptions[{index}] cannot be empty"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RequestEcho<T> {
    pub request_id: String,
    pub payload: T,
}

#[derive(Debug, Serialize)]
pub struct JobUploadResponse {
    pub message: String,
    pub job_id: Vec<Uuid>,
    pub request: RequestEcho<JobUploadRequest>,
}

// ────────────────────────────────────────────────────────────────────────────
// Retrieval
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobIdQuery {
    pub job_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub request_id: String,
    pub data: JobDetail,
}

/// Raw and processed sections of one job. `processed_job` is `None` until an
/// extraction has succeeded.
#[derive(Debug, Serialize)]
pub struct JobDetail {
    pub job_id: Uuid,
    pub raw_job: RawJobView,
    pub processed_job: Option<ProcessedJobView>,
}

#[derive(Debug, Serialize)]
pub struct RawJobView {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for RawJobView {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.job_id,
            resume_id: row.resume_id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessedJobView {
    pub job_title: Option<String>,
    pub company_profile: Option<CompanyProfile>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub employment_type: Option<String>,
    pub job_summary: Option<String>,
    pub key_responsibilities: Option<Vec<String>>,
    pub qualifications: Option<Qualifications>,
    pub compensation_and_benefits: Option<CompensationAndBenefits>,
    pub application_info: Option<ApplicationInfo>,
    pub extracted_keywords: Option<Vec<String>>,
    pub processed_at: DateTime<Utc>,
}

impl TryFrom<ProcessedJobRow> for ProcessedJobView {
    type Error = serde_json::Error;

    /// Reconstitutes the stored JSON text columns into lists and objects.
    fn try_from(row: ProcessedJobRow) -> Result<Self, Self::Error> {
        Ok(Self {
            job_title: row.job_title,
            company_profile: parse_column(row.company_profile)?,
            location: row.location,
            date_posted: row.date_posted,
            employment_type: row.employment_type,
            job_summary: row.job_summary,
            key_responsibilities: parse_column(row.key_responsibilities)?,
            qualifications: parse_column(row.qualifications)?,
            compensation_and_benefits: parse_column(row.compensation_and_benefits)?,
            application_info: parse_column(row.application_info)?,
            extracted_keywords: parse_column(row.extracted_keywords)?,
            processed_at: row.processed_at,
        })
    }
}

fn parse_column<T: serde::de::DeserializeOwned>(
    text: Option<String>,
) -> Result<Option<T>, serde_json::Error> {
    text.as_deref().map(serde_json::from_str).transpose()
}
