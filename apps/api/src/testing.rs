//! Test doubles shared across modules.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::extraction::ExtractionAgent;
use crate::llm_client::LlmError;

/// Agent that replays canned replies in order and records every prompt it sees.
/// Once the script runs out it answers `EmptyContent`.
pub struct ScriptedAgent {
    replies: Mutex<VecDeque<Result<Value, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn new(replies: Vec<Result<Value, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtractionAgent for ScriptedAgent {
    async fn run(&self, prompt: &str) -> Result<Value, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// A well-formed agent answer for a backend posting.
pub fn sample_agent_output() -> Value {
    json!({
        "job_title": "Senior Backend Engineer",
        "company_profile": {
            "company_name": "Northwind Payments",
            "industry": "Fintech",
            "website": "https://northwind.example",
            "description": "Card processing for small businesses."
        },
        "location": "Hybrid",
        "date_posted": "2025-05-12",
        "employment_type": "Full-time",
        "job_summary": "Own the settlement services that move merchant funds.",
        "key_responsibilities": [
            "Design and operate settlement services",
            "Lead incident reviews",
            "Mentor two engineers"
        ],
        "qualifications": {
            "required": ["5+ years backend experience", "Rust or Go"],
            "preferred": ["Payments domain knowledge"]
        },
        "compensation_and_benefits": {
            "salary_range": "$170,000 - $200,000",
            "benefits": ["Health insurance", "401(k) match"]
        },
        "application_info": {
            "how_to_apply": "Apply online",
            "apply_link": "https://northwind.example/careers/42",
            "contact_email": null
        },
        "extracted_keywords": ["Rust", "Go", "PostgreSQL", "payments"]
    })
}
