use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_id, AppJson};
use crate::models::{Api, ApiInput, HealthCheck, HealthCheckDetails, HealthStatus};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterApiRequest {
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub version: String,
    pub owner_id: String,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<RegisterApiRequest> for ApiInput {
    fn from(r: RegisterApiRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            base_url: r.base_url,
            version: r.version,
            owner_id: r.owner_id,
            documentation_url: r.documentation_url,
            tags: r.tags,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub api_id: String,
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub version: String,
    pub owner_id: String,
    pub documentation_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Api> for ApiResponse {
    fn from(a: Api) -> Self {
        Self {
            api_id: a.id,
            name: a.name,
            description: a.description,
            base_url: a.base_url,
            version: a.version,
            owner_id: a.owner_id,
            documentation_url: a.documentation_url,
            tags: a.tags,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiListResponse {
    pub data: Vec<ApiResponse>,
    pub total: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckResponse {
    pub check_id: String,
    pub api_id: String,
    pub status: HealthStatus,
    pub response_time: f64,
    pub timestamp: i64,
    pub details: HealthCheckDetails,
}

impl From<HealthCheck> for HealthCheckResponse {
    fn from(c: HealthCheck) -> Self {
        Self {
            check_id: c.id,
            api_id: c.api_id,
            status: c.status,
            response_time: c.response_time,
            timestamp: c.timestamp,
            details: c.details,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckListResponse {
    pub data: Vec<HealthCheckResponse>,
    pub total: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ============ Handlers ============

/// Register a new API
#[utoipa::path(
    post,
    path = "/api/v1/apis",
    request_body = RegisterApiRequest,
    responses(
        (status = 200, description = "API registered", body = ApiResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "APIs"
)]
pub async fn register_api(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterApiRequest>,
) -> AppResult<Json<ApiResponse>> {
    let api = state.apis.create(payload.into()).await?;
    tracing::info!(api_id = %api.id, name = %api.name, "API registered");
    Ok(Json(api.into()))
}

/// List all registered APIs
#[utoipa::path(
    get,
    path = "/api/v1/apis",
    responses(
        (status = 200, description = "List of APIs", body = ApiListResponse)
    ),
    tag = "APIs"
)]
pub async fn list_apis(State(state): State<AppState>) -> AppResult<Json<ApiListResponse>> {
    let apis = state.apis.list().await?;

    Ok(Json(ApiListResponse {
        total: apis.len() as u64,
        data: apis.into_iter().map(|a| a.into()).collect(),
    }))
}

/// Get an API by ID
#[utoipa::path(
    get,
    path = "/api/v1/apis/{api_id}",
    params(
        ("api_id" = String, Path, description = "API ID")
    ),
    responses(
        (status = 200, description = "API details", body = ApiResponse),
        (status = 404, description = "API not found")
    ),
    tag = "APIs"
)]
pub async fn get_api(
    State(state): State<AppState>,
    Path(api_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let api_id = require_id(&api_id, "API")?;
    let api = state.apis.find_by_id(api_id).await?;
    Ok(Json(api.into()))
}

/// Update an API
#[utoipa::path(
    put,
    path = "/api/v1/apis/{api_id}",
    params(
        ("api_id" = String, Path, description = "API ID")
    ),
    request_body = RegisterApiRequest,
    responses(
        (status = 200, description = "API updated", body = ApiResponse),
        (status = 404, description = "API not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "APIs"
)]
pub async fn update_api(
    State(state): State<AppState>,
    Path(api_id): Path<String>,
    AppJson(payload): AppJson<RegisterApiRequest>,
) -> AppResult<Json<ApiResponse>> {
    let api_id = require_id(&api_id, "API")?;
    let api = state.apis.update(api_id, payload.into()).await?;
    tracing::info!(api_id = %api.id, "API updated");
    Ok(Json(api.into()))
}

/// Delete an API
#[utoipa::path(
    delete,
    path = "/api/v1/apis/{api_id}",
    params(
        ("api_id" = String, Path, description = "API ID")
    ),
    responses(
        (status = 200, description = "API deleted", body = MessageResponse),
        (status = 404, description = "API not found")
    ),
    tag = "APIs"
)]
pub async fn delete_api(
    State(state): State<AppState>,
    Path(api_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let api_id = require_id(&api_id, "API")?;
    state.apis.delete(api_id).await?;
    tracing::info!(api_id = %api_id, "API deleted");

    Ok(Json(MessageResponse {
        message: format!("API {} deleted successfully", api_id),
    }))
}

/// Health check results for an API
#[utoipa::path(
    get,
    path = "/api/v1/apis/{api_id}/health-checks",
    params(
        ("api_id" = String, Path, description = "API ID")
    ),
    responses(
        (status = 200, description = "Recent health checks", body = HealthCheckListResponse)
    ),
    tag = "APIs"
)]
pub async fn list_health_checks(
    State(state): State<AppState>,
    Path(api_id): Path<String>,
) -> AppResult<Json<HealthCheckListResponse>> {
    let checks = state.apis.list_health_checks(&api_id).await?;

    Ok(Json(HealthCheckListResponse {
        total: checks.len() as u64,
        data: checks.into_iter().map(|c| c.into()).collect(),
    }))
}

/// Requests addressed to `/api/v1/apis/` with an empty identifier
pub async fn missing_api_id() -> AppError {
    AppError::NotFound("API".to_string())
}
