use std::sync::Arc;

use crate::config::Config;
use crate::extraction::JobExtractor;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed in production; owns no pool lifecycle (main closes the pool).
    pub store: Arc<dyn JobStore>,
    pub extractor: JobExtractor,
    pub config: Config,
}
