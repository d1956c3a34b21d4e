use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_participants: i64,
    pub total_responses: i64,
}

/// GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let total_participants = state.store.count_participants().await?;
    let total_responses = state.store.count_responses().await?;
    Ok(Json(Stats {
        total_participants,
        total_responses,
    }))
}
