use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// One recorded probe of a registered API
#[derive(Debug, Clone, PartialEq)]
pub struct HealthCheck {
    pub id: String,
    pub api_id: String,
    pub status: HealthStatus,
    pub response_time: f64,
    pub timestamp: i64,
    pub details: HealthCheckDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HealthCheckDetails {
    pub status_code: u16,
    pub response_size: u64,
    pub endpoint: String,
}
