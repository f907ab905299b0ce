use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use utoipa::ToSchema;

use crate::config::Config;

/// Database liveness as reported by the status endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatabaseStatus {
    Up,
    Down,
}

impl<E> From<&Result<(), E>> for DatabaseStatus {
    fn from(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => DatabaseStatus::Up,
            Err(_) => DatabaseStatus::Down,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connection timed out after {0:?}")]
    Timeout(Duration),

    #[error("probe query failed: {0}")]
    Query(String),

    #[error("closing connection failed: {0}")]
    Close(String),
}

/// Connectivity check against the backing database
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Open a connection and close it again
    async fn ping(&self) -> Result<(), ProbeError>;

    /// Open a connection, run `SELECT 1`, and close it
    async fn check(&self) -> Result<(), ProbeError>;
}

/// Probes PostgreSQL with a fresh connection per call
#[derive(Debug, Clone)]
pub struct PostgresProbe {
    options: PgConnectOptions,
    connect_timeout: Duration,
}

impl PostgresProbe {
    pub fn new(config: &Config) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);

        Self {
            options,
            connect_timeout: config.db_connect_timeout(),
        }
    }

    async fn connect(&self) -> Result<PgConnection, ProbeError> {
        match tokio::time::timeout(
            self.connect_timeout,
            PgConnection::connect_with(&self.options),
        )
        .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(ProbeError::Connect(e.to_string())),
            Err(_) => Err(ProbeError::Timeout(self.connect_timeout)),
        }
    }
}

#[async_trait]
impl DatabaseProbe for PostgresProbe {
    async fn ping(&self) -> Result<(), ProbeError> {
        let conn = self.connect().await?;
        conn.close()
            .await
            .map_err(|e| ProbeError::Close(e.to_string()))
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let mut conn = self.connect().await?;
        sqlx::query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|e| ProbeError::Query(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| ProbeError::Close(e.to_string()))
    }
}

/// Probe with a fixed outcome, for wiring without a database
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    failure: Option<String>,
}

impl StaticProbe {
    pub fn up() -> Self {
        Self { failure: None }
    }

    pub fn down(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
        }
    }

    fn outcome(&self) -> Result<(), ProbeError> {
        match &self.failure {
            None => Ok(()),
            Some(reason) => Err(ProbeError::Connect(reason.clone())),
        }
    }
}

#[async_trait]
impl DatabaseProbe for StaticProbe {
    async fn ping(&self) -> Result<(), ProbeError> {
        self.outcome()
    }

    async fn check(&self) -> Result<(), ProbeError> {
        self.outcome()
    }
}
