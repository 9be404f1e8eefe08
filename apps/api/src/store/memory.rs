//! In-memory `JobStore` for tests. Counts every call so tests can assert that a
//! request was rejected before touching storage.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::job::{JobRow, NewJob, NewProcessedJob, ProcessedJobRow};
use crate::store::JobStore;

#[derive(Default)]
pub struct MemoryJobStore {
    resumes: Mutex<HashSet<Uuid>>,
    jobs: Mutex<Vec<JobRow>>,
    processed: Mutex<HashMap<Uuid, ProcessedJobRow>>,
    calls: AtomicUsize,
}

impl MemoryJobStore {
    pub fn with_resume(resume_id: Uuid) -> Self {
        let store = Self::default();
        store.resumes.lock().unwrap().insert(resume_id);
        store
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn job_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn processed_count(&self) -> usize {
        self.processed.lock().unwrap().len()
    }

    pub fn jobs(&self) -> Vec<JobRow> {
        self.jobs.lock().unwrap().clone()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn resume_exists(&self, resume_id: Uuid) -> Result<bool, sqlx::Error> {
        self.touch();
        Ok(self.resumes.lock().unwrap().contains(&resume_id))
    }

    async fn insert_job(&self, job: NewJob) -> Result<JobRow, sqlx::Error> {
        self.touch();
        let row = JobRow {
            job_id: job.job_id,
            resume_id: job.resume_id,
            content: job.content,
            created_at: Utc::now(),
        };
        self.jobs.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn insert_processed_job(
        &self,
        processed: NewProcessedJob,
    ) -> Result<ProcessedJobRow, sqlx::Error> {
        self.touch();
        let row = ProcessedJobRow {
            job_id: processed.job_id,
            job_title: processed.job_title,
            company_profile: processed.company_profile,
            location: processed.location,
            date_posted: processed.date_posted,
            employment_type: processed.employment_type,
            job_summary: processed.job_summary,
            key_responsibilities: processed.key_responsibilities,
            qualifications: processed.qualifications,
            compensation_and_benefits: processed.compensation_and_benefits,
            application_info: processed.application_info,
            extracted_keywords: processed.extracted_keywords,
            processed_at: Utc::now(),
        };
        self.processed
            .lock()
            .unwrap()
            .insert(row.job_id, row.clone());
        Ok(row)
    }

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        self.touch();
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.job_id == job_id)
            .cloned())
    }

    async fn find_processed_job(
        &self,
        job_id: Uuid,
    ) -> Result<Option<ProcessedJobRow>, sqlx::Error> {
        self.touch();
        Ok(self.processed.lock().unwrap().get(&job_id).cloned())
    }
}
