pub mod health;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as comparisons;
use crate::participants::handlers as participants;
use crate::responses::handlers as responses;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/stats", get(stats::stats_handler))
        .route(
            "/participants",
            post(participants::handle_create_participant),
        )
        .route(
            "/participants/:participant_id",
            get(participants::handle_get_participant),
        )
        .route(
            "/participants/:participant_id/responses",
            get(responses::handle_list_responses),
        )
        .route(
            "/comparisons/:participant_id",
            get(comparisons::handle_get_comparisons),
        )
        .route("/responses", post(responses::handle_submit_response))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::generation::comparisons::build_comparisons;
    use crate::generation::listing::{generate_listing, ComparisonPair};
    use crate::store::MemorySurveyStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(MemorySurveyStore::new()),
            config: Config::default(),
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    fn participant_body(email: &str) -> Value {
        json!({
            "email": email,
            "name": "Riley Chen",
            "zip_code": "60614",
            "position": "Software Engineer",
            "work_preference": "Remote",
            "salary_range": "$100,000 - $150,000"
        })
    }

    fn choice_body(participant_id: &str, pair: &ComparisonPair, selected_job: i64) -> Value {
        json!({
            "participant_id": participant_id,
            "comparison_id": pair.id,
            "selected_job": selected_job,
            "job1": pair.job1,
            "job2": pair.job2,
        })
    }

    async fn create_participant(app: &Router, email: &str) -> String {
        let (status, body) = post(app, "/participants", participant_body(email)).await;
        assert_eq!(status, StatusCode::CREATED);
        body["participant_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let app = app();
        let (status, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");

        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_end_to_end_choice_is_recorded_verbatim() {
        let app = app();
        let id = create_participant(&app, "riley@example.com").await;

        let (status, comparisons) = get(&app, &format!("/comparisons/{id}?count=5")).await;
        assert_eq!(status, StatusCode::OK);
        let pairs = comparisons.as_array().unwrap();
        assert_eq!(pairs.len(), 5);
        let ids: Vec<i64> = pairs.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let first = &pairs[0];
        let submit = json!({
            "participant_id": id,
            "comparison_id": 0,
            "selected_job": 1,
            "job1": first["job1"],
            "job2": first["job2"],
        });
        let (status, _) = post(&app, "/responses", submit).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, records) = get(&app, &format!("/participants/{id}/responses")).await;
        assert_eq!(status, StatusCode::OK);
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["comparison_id"], 0);
        assert_eq!(records[0]["selected_job"], 1);
        assert_eq!(records[0]["job1"], first["job1"]);
        assert_eq!(records[0]["job2"], first["job2"]);
        assert_eq!(records[0]["participant_id"], id.as_str());
    }

    #[tokio::test]
    async fn test_comparisons_match_builder_and_repeat() {
        let app = app();
        let id = create_participant(&app, "repeat@example.com").await;

        let (_, first) = get(&app, &format!("/comparisons/{id}")).await;
        let (_, second) = get(&app, &format!("/comparisons/{id}")).await;
        assert_eq!(first, second);

        let pairs = build_comparisons(&id, 5).unwrap();
        let expected = serde_json::to_value(pairs).unwrap();
        assert_eq!(first, expected);
    }

    #[tokio::test]
    async fn test_comparison_count_boundaries() {
        let app = app();
        let id = create_participant(&app, "count@example.com").await;

        let (status, body) = get(&app, &format!("/comparisons/{id}?count=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = get(&app, &format!("/comparisons/{id}?count=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = get(&app, &format!("/comparisons/{id}?count=101")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(&app, &format!("/comparisons/{id}?count=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_vs_malformed_participant() {
        let app = app();
        let unknown = Uuid::new_v4().to_string();

        let (status, body) = get(&app, &format!("/comparisons/{unknown}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) = get(&app, "/comparisons/not-an-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = get(&app, &format!("/participants/{unknown}/responses")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(&app, "/participants/xyz/responses").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let pair = ComparisonPair {
            id: 0,
            job1: generate_listing(1),
            job2: generate_listing(2),
        };
        let (status, _) = post(&app, "/responses", choice_body(&unknown, &pair, 2)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = post(&app, "/responses", choice_body("12345", &pair, 2)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let app = app();
        create_participant(&app, "dup@example.com").await;

        let (status, body) = post(&app, "/participants", participant_body("dup@example.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_invalid_participant_fields_rejected() {
        let app = app();
        let mut body = participant_body("bad-email");
        body["zip_code"] = json!("1234");
        body["work_preference"] = json!("Anywhere");

        let (status, response) = post(&app, "/participants", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("email"));
        assert!(message.contains("zip_code"));
        assert!(message.contains("work_preference"));

        let (status, _) = post(&app, "/participants", json!({"email": "a@b.co"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_email_with_unquoted_specials_rejected() {
        let app = app();
        for email in ["a<b>@example.com", "a,b@example.com", "a;b@example.com"] {
            let (status, body) = post(&app, "/participants", participant_body(email)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{email}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }

        let (_, stats) = get(&app, "/stats").await;
        assert_eq!(stats["total_participants"], 0);
    }

    #[tokio::test]
    async fn test_get_participant_record() {
        let app = app();
        let id = create_participant(&app, "lookup@example.com").await;

        let (status, body) = get(&app, &format!("/participants/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "lookup@example.com");
        assert_eq!(body["work_preference"], "Remote");
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_selected_job_out_of_range() {
        let app = app();
        let id = create_participant(&app, "range@example.com").await;
        let pair = &build_comparisons(&id, 1).unwrap()[0];

        let (status, _) = post(&app, "/responses", choice_body(&id, pair, 3)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_responses_listed_by_comparison_id() {
        let app = app();
        let id = create_participant(&app, "order@example.com").await;
        let pairs = build_comparisons(&id, 3).unwrap();

        for pair in pairs.iter().rev() {
            let (status, _) = post(&app, "/responses", choice_body(&id, pair, 2)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, records) = get(&app, &format!("/participants/{id}/responses")).await;
        let ids: Vec<i64> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["comparison_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let app = app();
        let (status, body) = get(&app, "/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"total_participants": 0, "total_responses": 0}));

        let id = create_participant(&app, "stats@example.com").await;
        create_participant(&app, "stats2@example.com").await;
        let pair = &build_comparisons(&id, 1).unwrap()[0];
        post(&app, "/responses", choice_body(&id, pair, 1)).await;

        let (_, body) = get(&app, "/stats").await;
        assert_eq!(body, json!({"total_participants": 2, "total_responses": 1}));
    }
}
