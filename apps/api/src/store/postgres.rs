use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::{JobRow, NewJob, NewProcessedJob, ProcessedJobRow};
use crate::store::JobStore;

#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn resume_exists(&self, resume_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM resumes WHERE resume_id = $1)")
            .bind(resume_id)
            .fetch_one(&self.pool)
            .await
    }

    async fn insert_job(&self, job: NewJob) -> Result<JobRow, sqlx::Error> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (job_id, resume_id, content)
            VALUES ($1, $2, $3)
            RETURNING job_id, resume_id, content, created_at
            "#,
        )
        .bind(job.job_id)
        .bind(job.resume_id)
        .bind(&job.content)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job {} for resume {}", row.job_id, row.resume_id);
        Ok(row)
    }

    async fn insert_processed_job(
        &self,
        processed: NewProcessedJob,
    ) -> Result<ProcessedJobRow, sqlx::Error> {
        let row = sqlx::query_as::<_, ProcessedJobRow>(
            r#"
            INSERT INTO processed_jobs
                (job_id, job_title, company_profile, location, date_posted,
                 employment_type, job_summary, key_responsibilities, qualifications,
                 compensation_and_benefits, application_info, extracted_keywords)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(processed.job_id)
        .bind(processed.job_title)
        .bind(processed.company_profile)
        .bind(processed.location)
        .bind(processed.date_posted)
        .bind(processed.employment_type)
        .bind(processed.job_summary)
        .bind(processed.key_responsibilities)
        .bind(processed.qualifications)
        .bind(processed.compensation_and_benefits)
        .bind(processed.application_info)
        .bind(processed.extracted_keywords)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted processed job {}", row.job_id);
        Ok(row)
    }

    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            "SELECT job_id, resume_id, content, created_at FROM jobs WHERE job_id = $1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_processed_job(
        &self,
        job_id: Uuid,
    ) -> Result<Option<ProcessedJobRow>, sqlx::Error> {
        sqlx::query_as::<_, ProcessedJobRow>("SELECT * FROM processed_jobs WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
    }
}
