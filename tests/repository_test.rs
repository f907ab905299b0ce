mod common;

use std::sync::Arc;

use api_management::error::{AppError, AppResult};
use api_management::models::{
    Api, ApiInput, ContactSubmission, HealthCheck, NewsletterSubscription, TrialWaitlistEntry,
};
use api_management::repositories::{ApiRepository, SubmissionRepository};
use api_management::services::{StaticProbe, SystemGenerator};
use api_management::state::AppState;
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use common::{api_registration, test_config, TestApp};

/// Repository that knows no APIs at all
struct EmptyApiRepository;

#[async_trait]
impl ApiRepository for EmptyApiRepository {
    async fn create(&self, _input: ApiInput) -> AppResult<Api> {
        Err(AppError::Internal("read-only repository".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Api> {
        Err(AppError::NotFound("API".to_string()))
    }

    async fn list(&self) -> AppResult<Vec<Api>> {
        Ok(Vec::new())
    }

    async fn update(&self, _id: &str, _input: ApiInput) -> AppResult<Api> {
        Err(AppError::NotFound("API".to_string()))
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Err(AppError::NotFound("API".to_string()))
    }

    async fn list_health_checks(&self, _api_id: &str) -> AppResult<Vec<HealthCheck>> {
        Ok(Vec::new())
    }
}

/// Repository that hands out one fixed id
struct FixedIdSubmissionRepository;

#[async_trait]
impl SubmissionRepository for FixedIdSubmissionRepository {
    async fn save_contact(&self, _submission: ContactSubmission) -> AppResult<String> {
        Ok("contact-0".to_string())
    }

    async fn save_newsletter(&self, _subscription: NewsletterSubscription) -> AppResult<String> {
        Ok("newsletter-0".to_string())
    }

    async fn save_waitlist(&self, _entry: TrialWaitlistEntry) -> AppResult<String> {
        Ok("waitlist-0".to_string())
    }
}

fn app_with_custom_repositories() -> TestApp {
    TestApp::from_state(AppState::with_repositories(
        test_config(),
        Arc::new(SystemGenerator),
        Arc::new(StaticProbe::up()),
        Arc::new(EmptyApiRepository),
        Arc::new(FixedIdSubmissionRepository),
    ))
}

#[tokio::test]
async fn test_handlers_use_supplied_api_repository() {
    let app = app_with_custom_repositories();

    let body: serde_json::Value = app.server.get("/api/v1/apis").await.json();
    assert_eq!(body["total"], 0);
    assert_eq!(body["data"], json!([]));

    app.server
        .get("/api/v1/apis/orders-v2")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .post("/api/v1/apis")
        .json(&api_registration())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_handlers_use_supplied_submission_repository() {
    let app = app_with_custom_repositories();

    let response = app
        .server
        .post("/api/v1/newsletter-subscriptions")
        .json(&json!({ "email": "jane@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["subscription_id"], "newsletter-0");
}
