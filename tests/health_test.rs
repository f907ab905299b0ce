mod common;

use std::sync::Arc;

use api_management::services::{StaticProbe, SystemGenerator};
use axum::http::StatusCode;

use common::TestApp;

#[tokio::test]
async fn test_root_banner() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["service"], "API Management Service");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_with_database_up() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["service"], "api-management-service");
    assert_eq!(body["database"], "UP");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = TestApp::without_database();

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["database"], "DOWN");
}

#[tokio::test]
async fn test_service_status_success() {
    let app = TestApp::deterministic();

    let response = app.server.get("/service-status").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["service"], "api-management-service");
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["database"], "UP");
    assert_eq!(body["timestamp"], "2024-06-01 12:00:00");
    assert_eq!(
        body["message"],
        "API Management Service is operational with database connectivity"
    );
}

#[tokio::test]
async fn test_service_status_reports_unreachable_database() {
    let app = TestApp::without_database();

    let response = app.server.get("/service-status").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "FAILURE");
    assert_eq!(body["database"], "DOWN");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("API Management Service is degraded - database connectivity issue: "));
}

#[tokio::test]
async fn test_service_status_includes_probe_error() {
    let app = TestApp::with_parts(
        Arc::new(SystemGenerator),
        Arc::new(StaticProbe::down("password authentication failed")),
    );

    let response = app.server.get("/service-status").await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "FAILURE");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .ends_with("password authentication failed"));
}
