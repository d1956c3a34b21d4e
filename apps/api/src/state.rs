use std::sync::Arc;

use crate::config::Config;
use crate::store::SurveyStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL or in-memory, chosen at startup from `DATABASE_URL`.
    pub store: Arc<dyn SurveyStore>,
    pub config: Config,
}
