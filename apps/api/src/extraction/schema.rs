//! Structured job schema: the shape the extraction agent is asked to fill, and the
//! validator its answers must pass before anything is persisted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("output does not match the structured job schema: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("required field '{0}' is blank")]
    BlankField(&'static str),
}

/// Work arrangement of a posting. The only values the `location` field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkLocation {
    #[serde(rename = "Fully Remote")]
    FullyRemote,
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
    #[serde(rename = "Not Specified")]
    NotSpecified,
    #[serde(rename = "Multiple Locations")]
    MultipleLocations,
}

impl WorkLocation {
    pub const ALL: [WorkLocation; 6] = [
        WorkLocation::FullyRemote,
        WorkLocation::Remote,
        WorkLocation::Hybrid,
        WorkLocation::OnSite,
        WorkLocation::NotSpecified,
        WorkLocation::MultipleLocations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkLocation::FullyRemote => "Fully Remote",
            WorkLocation::Remote => "Remote",
            WorkLocation::Hybrid => "Hybrid",
            WorkLocation::OnSite => "On-site",
            WorkLocation::NotSpecified => "Not Specified",
            WorkLocation::MultipleLocations => "Multiple Locations",
        }
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Temporary,
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
            EmploymentType::Temporary => "Temporary",
            EmploymentType::NotSpecified => "Not Specified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(alias = "companyName")]
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualifications {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationAndBenefits {
    #[serde(default, alias = "salaryRange")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    #[serde(default, alias = "howToApply")]
    pub how_to_apply: Option<String>,
    #[serde(default, alias = "applyLink")]
    pub apply_link: Option<String>,
    #[serde(default, alias = "contactEmail")]
    pub contact_email: Option<String>,
}

/// A job posting after successful extraction and validation.
///
/// Keys are accepted in snake_case or camelCase and always serialized as snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredJob {
    #[serde(alias = "jobTitle")]
    pub job_title: String,
    #[serde(alias = "companyProfile")]
    pub company_profile: CompanyProfile,
    pub location: WorkLocation,
    #[serde(default, alias = "datePosted")]
    pub date_posted: Option<String>,
    #[serde(alias = "employmentType")]
    pub employment_type: EmploymentType,
    #[serde(alias = "jobSummary")]
    pub job_summary: String,
    #[serde(
        default,
        alias = "keyResponsibilities",
        deserialize_with = "null_as_default"
    )]
    pub key_responsibilities: Vec<String>,
    #[serde(default)]
    pub qualifications: Option<Qualifications>,
    #[serde(
        default,
        alias = "compensationAndBenefits",
        alias = "compensation_and_benfits"
    )]
    pub compensation_and_benefits: Option<CompensationAndBenefits>,
    #[serde(default, alias = "applicationInfo")]
    pub application_info: Option<ApplicationInfo>,
    #[serde(
        default,
        alias = "extractedKeywords",
        deserialize_with = "null_as_default"
    )]
    pub extracted_keywords: Vec<String>,
}

impl StructuredJob {
    /// Validates raw agent output (already location-normalized) against the schema.
    pub fn from_agent_output(output: Value) -> Result<Self, SchemaError> {
        let job: StructuredJob = serde_json::from_value(output)?;
        job.check_required()?;
        Ok(job)
    }

    fn check_required(&self) -> Result<(), SchemaError> {
        if self.job_title.trim().is_empty() {
            return Err(SchemaError::BlankField("job_title"));
        }
        if self.company_profile.company_name.trim().is_empty() {
            return Err(SchemaError::BlankField("company_profile.company_name"));
        }
        if self.job_summary.trim().is_empty() {
            return Err(SchemaError::BlankField("job_summary"));
        }
        Ok(())
    }
}

/// LLMs emit `null` for empty lists about as often as `[]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON Schema description of `StructuredJob`, rendered into the extraction prompt.
pub fn job_schema() -> Value {
    let locations: Vec<&str> = WorkLocation::ALL.iter().map(|l| l.label()).collect();
    let string_list = json!({ "type": "array", "items": { "type": "string" } });
    let nullable_string = json!({ "type": ["string", "null"] });

    json!({
        "title": "StructuredJob",
        "type": "object",
        "required": [
            "job_title",
            "company_profile",
            "location",
            "employment_type",
            "job_summary"
        ],
        "properties": {
            "job_title": { "type": "string" },
            "company_profile": {
                "type": "object",
                "required": ["company_name"],
                "properties": {
                    "company_name": { "type": "string" },
                    "industry": nullable_string,
                    "website": nullable_string,
                    "description": nullable_string
                }
            },
            "location": {
                "type": "string",
                "enum": locations,
                "description": "Work arrangement. Pick exactly one value."
            },
            "date_posted": {
                "type": ["string", "null"],
                "description": "Posting date as written, preferably YYYY-MM-DD."
            },
            "employment_type": {
                "type": "string",
                "enum": ["Full-time", "Part-time", "Contract", "Internship", "Temporary", "Not Specified"]
            },
            "job_summary": { "type": "string" },
            "key_responsibilities": string_list,
            "qualifications": {
                "type": ["object", "null"],
                "properties": {
                    "required": string_list,
                    "preferred": string_list
                }
            },
            "compensation_and_benefits": {
                "type": ["object", "null"],
                "properties": {
                    "salary_range": nullable_string,
                    "benefits": string_list
                }
            },
            "application_info": {
                "type": ["object", "null"],
                "properties": {
                    "how_to_apply": nullable_string,
                    "apply_link": nullable_string,
                    "contact_email": nullable_string
                }
            },
            "extracted_keywords": string_list
        }
    })
}
