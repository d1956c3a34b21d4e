use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::listing::JobListing;

/// A validated choice ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub participant_id: Uuid,
    pub comparison_id: i64,
    pub selected_job: i16,
    pub job1: JobListing,
    pub job2: JobListing,
}

/// A recorded choice. `job1`/`job2` are the listings exactly as displayed,
/// never regenerated from the seed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct ResponseRecord {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub comparison_id: i64,
    pub selected_job: i16,
    pub job1: Json<JobListing>,
    pub job2: Json<JobListing>,
    pub created_at: DateTime<Utc>,
}
