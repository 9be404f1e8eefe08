//! Extraction pipeline: turns a raw job description into a validated `StructuredJob`.
//!
//! The agent sits behind `ExtractionAgent` so the pipeline can run against any
//! backend. `AppState` carries an `Arc<dyn ExtractionAgent>` inside `JobExtractor`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::extraction::normalize::normalize_location;
use crate::extraction::prompts::{STRUCTURED_JOB_PROMPT_TEMPLATE, STRUCTURED_JOB_SYSTEM};
use crate::extraction::schema::{job_schema, SchemaError, StructuredJob};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("extraction agent failed: {0}")]
    Agent(#[from] LlmError),

    #[error("agent output failed schema validation: {0}")]
    Validation(#[from] SchemaError),
}

/// Opaque text-generation agent: takes a rendered prompt, returns something
/// shaped like the requested schema (sometimes wrongly).
#[async_trait]
pub trait ExtractionAgent: Send + Sync {
    async fn run(&self, prompt: &str) -> Result<Value, LlmError>;
}

#[async_trait]
impl ExtractionAgent for LlmClient {
    async fn run(&self, prompt: &str) -> Result<Value, LlmError> {
        self.call_json::<Value>(prompt, STRUCTURED_JOB_SYSTEM).await
    }
}

#[derive(Clone)]
pub struct JobExtractor {
    agent: Arc<dyn ExtractionAgent>,
}

impl JobExtractor {
    pub fn new(agent: Arc<dyn ExtractionAgent>) -> Self {
        Self { agent }
    }

    /// Runs one description through the pipeline. Validation failures are
    /// returned, never swallowed, so LLM drift surfaces to the caller.
    pub async fn extract(&self, job_description: &str) -> Result<StructuredJob, ExtractionError> {
        let prompt = render_prompt(job_description);
        debug!("Structured job prompt: {prompt}");

        let mut raw_output = self.agent.run(&prompt).await?;
        debug!("Raw output from extraction agent: {raw_output}");

        normalize_location(&mut raw_output);

        StructuredJob::from_agent_output(raw_output.clone()).map_err(|e| {
            error!("Agent output failed validation: {e}; output: {raw_output}");
            ExtractionError::Validation(e)
        })
    }
}

/// Renders the extraction prompt with the pretty-printed schema and the raw text.
pub fn render_prompt(job_description: &str) -> String {
    STRUCTURED_JOB_PROMPT_TEMPLATE
        .replace("{json_schema}", &format!("{:#}", job_schema()))
        .replace("{job_description}", job_description)
}
