//! Axum route handler for the comparisons API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::comparisons::{build_comparisons, DEFAULT_COMPARISON_COUNT};
use crate::generation::listing::ComparisonPair;
use crate::participants::handlers::require_participant;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ComparisonQuery {
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    DEFAULT_COMPARISON_COUNT
}

/// GET /comparisons/:participant_id?count=N
///
/// Pairs are regenerated on every call; the same participant always sees the
/// same sequence.
pub async fn handle_get_comparisons(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
    query: Result<Query<ComparisonQuery>, QueryRejection>,
) -> Result<Json<Vec<ComparisonPair>>, AppError> {
    let Query(query) = query?;

    let participant = require_participant(state.store.as_ref(), &participant_id).await?;

    if query.count > state.config.max_comparisons {
        return Err(AppError::Validation(format!(
            "count must be at most {}, got {}",
            state.config.max_comparisons, query.count
        )));
    }

    let comparisons = build_comparisons(&participant.id.to_string(), query.count)?;
    debug!(
        "Generated {} comparisons for participant {}",
        comparisons.len(),
        participant.id
    );
    Ok(Json(comparisons))
}
