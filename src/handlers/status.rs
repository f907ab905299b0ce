use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::DatabaseStatus;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "api-management-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============ Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Seconds since process start
    pub uptime: f64,
    pub service: String,
    pub database: DatabaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceState {
    Success,
    Failure,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatusResponse {
    pub service: String,
    pub timestamp: String,
    pub database: DatabaseStatus,
    pub status: ServiceState,
    pub message: String,
}

// ============ Handlers ============

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        service: "API Management Service".to_string(),
        status: "running".to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// Liveness with uptime and database reachability
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe = state.probe.ping().await;
    if let Err(e) = &probe {
        tracing::warn!(error = %e, "Database unreachable during health check");
    }

    Json(HealthResponse {
        status: "UP".to_string(),
        version: SERVICE_VERSION.to_string(),
        uptime: state.uptime(),
        service: SERVICE_NAME.to_string(),
        database: DatabaseStatus::from(&probe),
    })
}

/// Database connectivity check
#[utoipa::path(
    get,
    path = "/service-status",
    responses(
        (status = 200, description = "Service and database status", body = ServiceStatusResponse)
    ),
    tag = "Health"
)]
pub async fn service_status(State(state): State<AppState>) -> Json<ServiceStatusResponse> {
    let probe = state.probe.check().await;

    let (status, message) = match &probe {
        Ok(()) => (
            ServiceState::Success,
            "API Management Service is operational with database connectivity".to_string(),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database connectivity check failed");
            (
                ServiceState::Failure,
                format!(
                    "API Management Service is degraded - database connectivity issue: {}",
                    e
                ),
            )
        }
    };

    Json(ServiceStatusResponse {
        service: SERVICE_NAME.to_string(),
        timestamp: state.generator.timestamp(),
        database: DatabaseStatus::from(&probe),
        status,
        message,
    })
}
