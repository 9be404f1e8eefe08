//! Job service: stores uploaded postings and drives each through extraction.
//!
//! Per job: `created → extraction_pending → {extraction_succeeded | extraction_failed}`.
//! The raw row is committed before extraction starts and is never rolled back.
//! Descriptions in a batch run sequentially; the first failure stops the batch.

use anyhow::Context;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::JobExtractor;
use crate::jobs::models::{JobDetail, JobUploadRequest, ProcessedJobView};
use crate::models::job::{JobRow, NewJob, NewProcessedJob};
use crate::store::JobStore;

/// Stores every description as a Job and extracts its structured form.
/// Returns the generated job ids in input order.
pub async fn create_and_store_jobs(
    store: &dyn JobStore,
    extractor: &JobExtractor,
    request: &JobUploadRequest,
) -> Result<Vec<Uuid>, AppError> {
    request.validate()?;

    let resume_id = request.resume_id;
    if !store.resume_exists(resume_id).await? {
        return Err(AppError::ResumeNotFound(resume_id));
    }

    let mut job_ids = Vec::with_capacity(request.job_descriptions.len());
    for description in &request.job_descriptions {
        let job = store
            .insert_job(NewJob {
                job_id: Uuid::new_v4(),
                resume_id,
                content: description.clone(),
            })
            .await?;
        info!("Job {} created; extraction pending", job.job_id);

        extract_and_store_structured_job(store, extractor, &job).await?;
        job_ids.push(job.job_id);
    }

    Ok(job_ids)
}

async fn extract_and_store_structured_job(
    store: &dyn JobStore,
    extractor: &JobExtractor,
    job: &JobRow,
) -> Result<(), AppError> {
    let structured = match extractor.extract(&job.content).await {
        Ok(structured) => structured,
        Err(e) => {
            warn!("Job {} extraction failed: {e}", job.job_id);
            return Err(e.into());
        }
    };

    let processed = NewProcessedJob::from_structured(job.job_id, &structured)
        .context("failed to serialize structured job")?;
    store.insert_processed_job(processed).await?;

    info!("Job {} extraction succeeded", job.job_id);
    Ok(())
}

/// Fetches a job and, when present, its structured extraction.
pub async fn get_job_with_processed_data(
    store: &dyn JobStore,
    job_id: Uuid,
) -> Result<JobDetail, AppError> {
    let job = store
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job with id {job_id} not found")))?;

    let processed_job = store
        .find_processed_job(job_id)
        .await?
        .map(ProcessedJobView::try_from)
        .transpose()
        .with_context(|| format!("stored processed job {job_id} is not valid JSON"))?;

    Ok(JobDetail {
        job_id: job.job_id,
        raw_job: job.into(),
        processed_job,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::llm_client::LlmError;
    use crate::store::memory::MemoryJobStore;
    use crate::testing::{sample_agent_output, ScriptedAgent};

    fn extractor(replies: Vec<Result<serde_json::Value, LlmError>>) -> JobExtractor {
        JobExtractor::new(Arc::new(ScriptedAgent::new(replies)))
    }

    fn upload(resume_id: Uuid, descriptions: &[&str]) -> JobUploadRequest {
        JobUploadRequest {
            resume_id,
            job_descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_unknown_resume_creates_no_job() {
        let store = MemoryJobStore::default();
        let extractor = extractor(vec![Ok(sample_agent_output())]);

        let err = create_and_store_jobs(&store, &extractor, &upload(Uuid::new_v4(), &["JD"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResumeNotFound(_)));
        assert_eq!(store.job_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected_before_storage() {
        let resume_id = Uuid::new_v4();
        let store = MemoryJobStore::with_resume(resume_id);
        let extractor = extractor(vec![]);

        let err = create_and_store_jobs(&store, &extractor, &upload(resume_id, &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_each_description_gets_job_and_processed_job() {
        let resume_id = Uuid::new_v4();
        let store = MemoryJobStore::with_resume(resume_id);
        let extractor = extractor(vec![Ok(sample_agent_output()), Ok(sample_agent_output())]);

        let ids = create_and_store_jobs(
            &store,
            &extractor,
            &upload(resume_id, &["first posting", "second posting"]),
        )
        .await
        .unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(store.job_count(), 2);
        assert_eq!(store.processed_count(), 2);
        let contents: Vec<String> = store.jobs().into_iter().map(|j| j.content).collect();
        assert_eq!(contents, vec!["first posting", "second posting"]);
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_raw_job_and_stops_batch() {
        let resume_id = Uuid::new_v4();
        let store = MemoryJobStore::with_resume(resume_id);
        let mut broken = sample_agent_output();
        broken["employment_type"] = serde_json::json!("Gig economy");
        let extractor = extractor(vec![
            Ok(sample_agent_output()),
            Ok(broken),
            Ok(sample_agent_output()),
        ]);

        let err = create_and_store_jobs(
            &store,
            &extractor,
            &upload(resume_id, &["first", "second", "third"]),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::ExtractionValidation(_)));
        // First job fully processed, second stored raw only, third never attempted.
        assert_eq!(store.job_count(), 2);
        assert_eq!(store.processed_count(), 1);

        let failed = &store.jobs()[1];
        let detail = get_job_with_processed_data(&store, failed.job_id)
            .await
            .unwrap();
        assert_eq!(detail.raw_job.content, "second");
        assert!(detail.processed_job.is_none());
    }

    #[tokio::test]
    async fn test_agent_failure_surfaces_as_llm_error() {
        let resume_id = Uuid::new_v4();
        let store = MemoryJobStore::with_resume(resume_id);
        let extractor = extractor(vec![Err(LlmError::EmptyContent)]);

        let err = create_and_store_jobs(&store, &extractor, &upload(resume_id, &["JD"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(store.job_count(), 1);
        assert_eq!(store.processed_count(), 0);
    }

    #[tokio::test]
    async fn test_get_job_merges_raw_and_processed() {
        let resume_id = Uuid::new_v4();
        let store = MemoryJobStore::with_resume(resume_id);
        let extractor = extractor(vec![Ok(sample_agent_output())]);
        let text = "Senior Backend Engineer\n\nNorthwind Payments is hiring.";

        let ids = create_and_store_jobs(&store, &extractor, &upload(resume_id, &[text]))
            .await
            .unwrap();
        let detail = get_job_with_processed_data(&store, ids[0]).await.unwrap();

        assert_eq!(detail.job_id, ids[0]);
        assert_eq!(detail.raw_job.id, ids[0]);
        assert_eq!(detail.raw_job.resume_id, resume_id);
        assert_eq!(detail.raw_job.content, text);
        let processed = detail.processed_job.unwrap();
        assert_eq!(processed.job_title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(processed.extracted_keywords.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_get_unknown_job_is_not_found() {
        let store = MemoryJobStore::default();
        let err = get_job_with_processed_data(&store, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
