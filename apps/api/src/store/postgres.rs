use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::participant::{NewParticipant, ParticipantRow};
use crate::models::response::{NewResponse, ResponseRecord};
use crate::store::{StoreError, StoreResult, SurveyStore};

const EMAIL_UNIQUE_CONSTRAINT: &str = "participants_email_key";

#[derive(Clone)]
pub struct PgSurveyStore {
    pool: PgPool,
}

impl PgSurveyStore {
    pub fn new(pool: PgPool) -> Self {
        PgSurveyStore { pool }
    }
}

#[async_trait]
impl SurveyStore for PgSurveyStore {
    async fn insert_participant(&self, participant: NewParticipant) -> StoreResult<ParticipantRow> {
        let result = sqlx::query_as::<_, ParticipantRow>(
            r#"
            INSERT INTO participants
                (id, email, name, zip_code, position, work_preference, salary_range)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&participant.email)
        .bind(&participant.name)
        .bind(&participant.zip_code)
        .bind(&participant.position)
        .bind(participant.work_preference.as_str())
        .bind(participant.salary_range.as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                Err(StoreError::DuplicateEmail {
                    email: participant.email,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_participant(&self, id: Uuid) -> StoreResult<Option<ParticipantRow>> {
        let row = sqlx::query_as::<_, ParticipantRow>("SELECT * FROM participants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_participant_by_email(&self, email: &str) -> StoreResult<Option<ParticipantRow>> {
        let row = sqlx::query_as::<_, ParticipantRow>("SELECT * FROM participants WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_response(&self, response: NewResponse) -> StoreResult<ResponseRecord> {
        Ok(sqlx::query_as::<_, ResponseRecord>(
            r#"
            INSERT INTO responses
                (id, participant_id, comparison_id, selected_job, job1, job2)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(response.participant_id)
        .bind(response.comparison_id)
        .bind(response.selected_job)
        .bind(Json(&response.job1))
        .bind(Json(&response.job2))
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_responses(&self, participant_id: Uuid) -> StoreResult<Vec<ResponseRecord>> {
        Ok(sqlx::query_as::<_, ResponseRecord>(
            r#"
            SELECT * FROM responses
            WHERE participant_id = $1
            ORDER BY comparison_id ASC, created_at ASC
            "#,
        )
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn count_participants(&self) -> StoreResult<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM participants")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn count_responses(&self) -> StoreResult<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM responses")
            .fetch_one(&self.pool)
            .await?)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
