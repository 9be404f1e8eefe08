// Job extraction pipeline: prompt → agent → normalize → validate.
// All model calls go through llm_client; persistence happens in jobs::service.

pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod schema;

pub use pipeline::{ExtractionAgent, ExtractionError, JobExtractor};
pub use schema::StructuredJob;
