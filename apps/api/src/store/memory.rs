use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::participant::{NewParticipant, ParticipantRow};
use crate::models::response::{NewResponse, ResponseRecord};
use crate::store::{StoreError, StoreResult, SurveyStore};

#[derive(Debug, Default)]
struct Tables {
    participants: HashMap<Uuid, ParticipantRow>,
    responses: Vec<ResponseRecord>,
}

/// In-process store. Each operation holds the lock for its whole duration,
/// which makes the email check-and-insert atomic.
#[derive(Debug, Default)]
pub struct MemorySurveyStore {
    tables: Mutex<Tables>,
}

impl MemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SurveyStore for MemorySurveyStore {
    async fn insert_participant(&self, participant: NewParticipant) -> StoreResult<ParticipantRow> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .participants
            .values()
            .any(|p| p.email == participant.email)
        {
            return Err(StoreError::DuplicateEmail {
                email: participant.email,
            });
        }

        let row = ParticipantRow {
            id: Uuid::new_v4(),
            email: participant.email,
            name: participant.name,
            zip_code: participant.zip_code,
            position: participant.position,
            work_preference: participant.work_preference.to_string(),
            salary_range: participant.salary_range.to_string(),
            created_at: Utc::now(),
        };
        tables.participants.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_participant(&self, id: Uuid) -> StoreResult<Option<ParticipantRow>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.participants.get(&id).cloned())
    }

    async fn find_participant_by_email(&self, email: &str) -> StoreResult<Option<ParticipantRow>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .participants
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn insert_response(&self, response: NewResponse) -> StoreResult<ResponseRecord> {
        let record = ResponseRecord {
            id: Uuid::new_v4(),
            participant_id: response.participant_id,
            comparison_id: response.comparison_id,
            selected_job: response.selected_job,
            job1: Json(response.job1),
            job2: Json(response.job2),
            created_at: Utc::now(),
        };
        let mut tables = self.tables.lock().unwrap();
        tables.responses.push(record.clone());
        Ok(record)
    }

    async fn list_responses(&self, participant_id: Uuid) -> StoreResult<Vec<ResponseRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut records: Vec<ResponseRecord> = tables
            .responses
            .iter()
            .filter(|r| r.participant_id == participant_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order within a comparison id.
        records.sort_by_key(|r| r.comparison_id);
        Ok(records)
    }

    async fn count_participants(&self) -> StoreResult<i64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.participants.len() as i64)
    }

    async fn count_responses(&self) -> StoreResult<i64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.responses.len() as i64)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
