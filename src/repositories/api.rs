use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Api, ApiInput, HealthCheck, HealthCheckDetails, HealthStatus};
use crate::services::Generator;

/// Storage boundary for API descriptors and their health checks
#[async_trait]
pub trait ApiRepository: Send + Sync {
    /// Register a new API
    async fn create(&self, input: ApiInput) -> AppResult<Api>;

    /// Find API by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Api>;

    /// List all registered APIs
    async fn list(&self) -> AppResult<Vec<Api>>;

    /// Replace the fields of an API
    async fn update(&self, id: &str, input: ApiInput) -> AppResult<Api>;

    /// Delete API by ID
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Recent health checks recorded for an API
    async fn list_health_checks(&self, api_id: &str) -> AppResult<Vec<HealthCheck>>;
}

const SAMPLE_LIST_SIZE: usize = 3;
const SAMPLE_HEALTH_CHECKS: usize = 5;

/// Repository without a backing store.
///
/// Writes echo their input and reads fabricate sample records, so every call
/// returns freshly generated identifiers and timestamps.
#[derive(Clone)]
pub struct SyntheticApiRepository {
    generator: Arc<dyn Generator>,
}

impl SyntheticApiRepository {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    fn build(&self, id: String, input: ApiInput) -> Api {
        let now = self.generator.timestamp();
        Api {
            id,
            name: input.name,
            description: input.description,
            base_url: input.base_url,
            version: input.version,
            owner_id: input.owner_id,
            documentation_url: input.documentation_url,
            tags: input.tags,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn sample(&self, id: String, suffix: Option<usize>) -> Api {
        let (label, host, docs) = match suffix {
            Some(i) => (format!(" {}", i), format!("api{}", i), format!("docs{}", i)),
            None => (String::new(), "api".to_string(), "docs".to_string()),
        };

        self.build(
            id,
            ApiInput {
                name: format!("Sample API{}", label),
                description: format!("This is a sample API{}", label),
                base_url: format!("https://{}.example.com", host),
                version: "1.0.0".to_string(),
                owner_id: "user-123".to_string(),
                documentation_url: Some(format!("https://{}.example.com", docs)),
                tags: vec!["sample".to_string(), "example".to_string()],
            },
        )
    }
}

#[async_trait]
impl ApiRepository for SyntheticApiRepository {
    async fn create(&self, input: ApiInput) -> AppResult<Api> {
        Ok(self.build(self.generator.id(), input))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Api> {
        Ok(self.sample(id.to_string(), None))
    }

    async fn list(&self) -> AppResult<Vec<Api>> {
        Ok((1..=SAMPLE_LIST_SIZE)
            .map(|i| self.sample(self.generator.id(), Some(i)))
            .collect())
    }

    async fn update(&self, id: &str, input: ApiInput) -> AppResult<Api> {
        Ok(self.build(id.to_string(), input))
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }

    async fn list_health_checks(&self, api_id: &str) -> AppResult<Vec<HealthCheck>> {
        let now = self.generator.unix_timestamp();

        Ok((0..SAMPLE_HEALTH_CHECKS)
            .map(|i| {
                // Every third check, starting with the most recent, is degraded
                let degraded = i % 3 == 0;
                HealthCheck {
                    id: self.generator.id(),
                    api_id: api_id.to_string(),
                    status: if degraded {
                        HealthStatus::Degraded
                    } else {
                        HealthStatus::Healthy
                    },
                    response_time: 0.5 + i as f64 * 0.1,
                    timestamp: now - (i as i64) * 3600,
                    details: HealthCheckDetails {
                        status_code: if degraded { 500 } else { 200 },
                        response_size: 1024,
                        endpoint: "/api/v1/resource".to_string(),
                    },
                }
            })
            .collect())
    }
}
