//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod execution;
pub mod health;
pub mod problems;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(execution::routes())
        .nest("/problems", problems::routes())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::{StaticFixtureProvider, StaticProblemCatalog};
    use crate::config::{Config, JudgeConfig, ServerConfig};
    use crate::judge::client::MockJudgeClient;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            judge: JudgeConfig {
                api_url: "http://judge.test".to_string(),
                api_host: "judge.test".to_string(),
                api_key: "test-key".to_string(),
                request_timeout_secs: 1,
                poll_interval_ms: 0,
                poll_max_attempts: 3,
            },
        }
    }

    fn app_with(client: MockJudgeClient) -> Router {
        let state = AppState::new(
            Arc::new(client),
            Arc::new(StaticProblemCatalog::new()),
            Arc::new(StaticFixtureProvider::new()),
            test_config(),
        );
        routes().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_problems() {
        let app = app_with(MockJudgeClient::new());

        let response = app
            .oneshot(Request::get("/problems").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert!(body["problems"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_get_unknown_problem_is_structured_404() {
        let app = app_with(MockJudgeClient::new());

        let response = app
            .oneshot(Request::get("/problems/9999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_source() {
        let app = app_with(MockJudgeClient::new());

        let payload = json!({
            "source_code": "",
            "language": "python",
            "stdin": ""
        });
        let response = app
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_submit_returns_normalized_result() {
        use base64::Engine;
        use base64::engine::general_purpose::STANDARD as BASE64;

        use crate::judge::types::{JudgeResponse, JudgeStatus, SubmissionToken};

        let mut client = MockJudgeClient::new();
        client.expect_create_submission().returning(|_| {
            Ok(SubmissionToken {
                token: "tok".to_string(),
            })
        });
        client.expect_get_submission().returning(|_| {
            Ok(JudgeResponse {
                status: JudgeStatus {
                    id: 3,
                    description: "Accepted".to_string(),
                },
                stdout: Some(BASE64.encode("Sum = 8")),
                stderr: None,
                compile_output: None,
                time: Some("0.001".to_string()),
                memory: Some(2048.0),
            })
        });

        let app = app_with(client);

        let payload = json!({
            "source_code": "print(sum(map(int, input().split())))",
            "language": "python",
            "stdin": "5 3"
        });
        let response = app
            .oneshot(
                Request::post("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["result"]["status"], json!("Accepted"));
        assert_eq!(body["result"]["output"], json!("Sum = 8"));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(MockJudgeClient::new());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
