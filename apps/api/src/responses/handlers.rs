//! Axum route handlers for recording and listing comparison choices.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::listing::JobListing;
use crate::models::response::{NewResponse, ResponseRecord};
use crate::participants::handlers::require_participant;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    pub participant_id: String,
    pub comparison_id: i64,
    pub selected_job: i64,
    /// Listings exactly as displayed to the participant.
    pub job1: JobListing,
    pub job2: JobListing,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponseResponse {
    pub message: String,
}

fn validate_choice(req: &SubmitResponseRequest) -> Result<i16, AppError> {
    if req.comparison_id < 0 {
        return Err(AppError::Validation(format!(
            "comparison_id must be non-negative, got {}",
            req.comparison_id
        )));
    }
    match req.selected_job {
        1 => Ok(1),
        2 => Ok(2),
        other => Err(AppError::Validation(format!(
            "selected_job must be 1 or 2, got {other}"
        ))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /responses
pub async fn handle_submit_response(
    State(state): State<AppState>,
    payload: Result<Json<SubmitResponseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponseResponse>), AppError> {
    let Json(req) = payload?;

    let selected_job = validate_choice(&req)?;
    let participant = require_participant(state.store.as_ref(), &req.participant_id).await?;

    let record = state
        .store
        .insert_response(NewResponse {
            participant_id: participant.id,
            comparison_id: req.comparison_id,
            selected_job,
            job1: req.job1,
            job2: req.job2,
        })
        .await?;

    info!(
        "Recorded choice {} for comparison {} of participant {}",
        record.selected_job, record.comparison_id, record.participant_id
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponseResponse {
            message: "Response recorded successfully".to_string(),
        }),
    ))
}

/// GET /participants/:participant_id/responses
pub async fn handle_list_responses(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
) -> Result<Json<Vec<ResponseRecord>>, AppError> {
    let participant = require_participant(state.store.as_ref(), &participant_id).await?;
    let records = state.store.list_responses(participant.id).await?;
    Ok(Json(records))
}
