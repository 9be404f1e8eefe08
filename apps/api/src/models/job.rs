use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::extraction::StructuredJob;

/// Raw job posting. Immutable once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Structured extraction of a job. Object and list fields hold serialized JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProcessedJobRow {
    pub job_id: Uuid,
    pub job_title: Option<String>,
    pub company_profile: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub employment_type: Option<String>,
    pub job_summary: Option<String>,
    pub key_responsibilities: Option<String>,
    pub qualifications: Option<String>,
    pub compensation_and_benefits: Option<String>,
    pub application_info: Option<String>,
    pub extracted_keywords: Option<String>,
    pub processed_at: DateTime<Utc>,
}

pub struct NewJob {
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub content: String,
}

/// Insert parameters for a `ProcessedJobRow`; `processed_at` is set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProcessedJob {
    pub job_id: Uuid,
    pub job_title: Option<String>,
    pub company_profile: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub employment_type: Option<String>,
    pub job_summary: Option<String>,
    pub key_responsibilities: Option<String>,
    pub qualifications: Option<String>,
    pub compensation_and_benefits: Option<String>,
    pub application_info: Option<String>,
    pub extracted_keywords: Option<String>,
}

impl NewProcessedJob {
    /// Flattens a validated extraction into storable columns.
    /// Empty lists and absent objects become NULL.
    pub fn from_structured(job_id: Uuid, job: &StructuredJob) -> Result<Self, serde_json::Error> {
        Ok(Self {
            job_id,
            job_title: non_blank(&job.job_title),
            company_profile: Some(serde_json::to_string(&job.company_profile)?),
            location: Some(job.location.label().to_string()),
            date_posted: job.date_posted.as_deref().and_then(non_blank),
            employment_type: Some(job.employment_type.label().to_string()),
            job_summary: non_blank(&job.job_summary),
            key_responsibilities: list_text(&job.key_responsibilities)?,
            qualifications: job
                .qualifications
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            compensation_and_benefits: job
                .compensation_and_benefits
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            application_info: job
                .application_info
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            extracted_keywords: list_text(&job.extracted_keywords)?,
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn list_text(items: &[String]) -> Result<Option<String>, serde_json::Error> {
    if items.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(items).map(Some)
}
