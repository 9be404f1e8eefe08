// LLM prompt constants for structured job extraction.

/// System prompt for job extraction. Enforces JSON-only output.
pub const STRUCTURED_JOB_SYSTEM: &str = "You are a precise job posting analyst. \
    Extract structured information from a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{json_schema}` and `{job_description}` before sending.
pub const STRUCTURED_JOB_PROMPT_TEMPLATE: &str = r#"Parse the following job description and return a single JSON object that conforms to this JSON Schema:

{json_schema}

Rules:
- Use the snake_case keys exactly as they appear in the schema. Do NOT add extra keys.
- "location" is the work arrangement, NOT a city. Pick exactly ONE of the enum values.
  Never combine values (no "Remote | Hybrid"). Use "Not Specified" when the posting is silent.
- "employment_type" must be one of the enum values. Use "Not Specified" when unclear.
- Copy facts from the posting only. Do NOT infer salary, benefits, or dates that are not stated.
- Use null for absent optional objects and [] for absent lists.
- "extracted_keywords" lists the skills, tools and domain terms a candidate would be matched on.

JOB DESCRIPTION:
{job_description}"#;
