//! Axum route handlers for participant registration and lookup.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::participant::ParticipantRow;
use crate::participants::validation::{validate_participant, CreateParticipantRequest};
use crate::state::AppState;
use crate::store::SurveyStore;

#[derive(Debug, Serialize)]
pub struct CreateParticipantResponse {
    pub participant_id: Uuid,
    pub message: String,
}

/// Parses a participant id and loads the participant.
///
/// Malformed ids are validation errors; well-formed but unknown ids are
/// not-found errors.
pub async fn require_participant(
    store: &dyn SurveyStore,
    raw_id: &str,
) -> Result<ParticipantRow, AppError> {
    let id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| AppError::Validation("Invalid participant ID format".to_string()))?;

    store
        .find_participant(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))
}

/// POST /participants
pub async fn handle_create_participant(
    State(state): State<AppState>,
    payload: Result<Json<CreateParticipantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateParticipantResponse>), AppError> {
    let Json(req) = payload?;

    let participant = validate_participant(&req).map_err(|errors| {
        AppError::Validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    if state
        .store
        .find_participant_by_email(&participant.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // The store re-checks uniqueness, so a racing duplicate still fails here.
    let row = state.store.insert_participant(participant).await?;
    info!("Registered participant {}", row.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateParticipantResponse {
            participant_id: row.id,
            message: "Participant created successfully".to_string(),
        }),
    ))
}

/// GET /participants/:participant_id
pub async fn handle_get_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
) -> Result<Json<ParticipantRow>, AppError> {
    let participant = require_participant(state.store.as_ref(), &participant_id).await?;
    Ok(Json(participant))
}
