//! Survey store — participants and their recorded choices.
//!
//! `SurveyStore` is backend-agnostic. `PgSurveyStore` persists to PostgreSQL;
//! `MemorySurveyStore` keeps everything in process for local runs and tests.
//! `AppState` carries an `Arc<dyn SurveyStore>` chosen at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::participant::{NewParticipant, ParticipantRow};
use crate::models::response::{NewResponse, ResponseRecord};

pub use memory::MemorySurveyStore;
pub use postgres::PgSurveyStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email '{email}' is already registered")]
    DuplicateEmail { email: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Guarantees:
/// - `insert_participant` fails with `DuplicateEmail` if the email exists,
///   even under concurrent inserts.
/// - `list_responses` returns records ordered by ascending `comparison_id`,
///   then by insertion time.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    async fn insert_participant(&self, participant: NewParticipant) -> StoreResult<ParticipantRow>;

    async fn find_participant(&self, id: Uuid) -> StoreResult<Option<ParticipantRow>>;

    async fn find_participant_by_email(&self, email: &str) -> StoreResult<Option<ParticipantRow>>;

    async fn insert_response(&self, response: NewResponse) -> StoreResult<ResponseRecord>;

    async fn list_responses(&self, participant_id: Uuid) -> StoreResult<Vec<ResponseRecord>>;

    async fn count_participants(&self) -> StoreResult<i64>;

    async fn count_responses(&self) -> StoreResult<i64>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
