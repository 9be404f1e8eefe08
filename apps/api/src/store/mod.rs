//! Persistence for jobs and their structured extractions.
//!
//! Handlers and the job service only see `JobStore`; `AppState` carries an
//! `Arc<dyn JobStore>` backed by Postgres in production.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::job::{JobRow, NewJob, NewProcessedJob, ProcessedJobRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgJobStore;

/// Every call is its own unit of work: a successful insert is committed on return.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn resume_exists(&self, resume_id: Uuid) -> Result<bool, sqlx::Error>;

    async fn insert_job(&self, job: NewJob) -> Result<JobRow, sqlx::Error>;

    async fn insert_processed_job(
        &self,
        processed: NewProcessedJob,
    ) -> Result<ProcessedJobRow, sqlx::Error>;

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error>;

    async fn find_processed_job(&self, job_id: Uuid)
        -> Result<Option<ProcessedJobRow>, sqlx::Error>;
}
