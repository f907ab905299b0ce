use std::sync::Arc;

use axum_test::TestServer;
use api_management::build_router;
use api_management::config::Config;
use api_management::services::{
    DatabaseProbe, FixedGenerator, Generator, PostgresProbe, StaticProbe, SystemGenerator,
};
use api_management::state::AppState;
use time::macros::datetime;

/// Test configuration pointing the database probe at a port with no listener
pub fn test_config() -> Config {
    Config {
        db_host: "127.0.0.1".to_string(),
        db_port: 1,
        db_connect_timeout_secs: 2,
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a test application whose database probe always succeeds
    pub fn new() -> Self {
        Self::with_parts(Arc::new(SystemGenerator), Arc::new(StaticProbe::up()))
    }

    /// Create a test application that really probes an unreachable PostgreSQL
    pub fn without_database() -> Self {
        let config = test_config();
        let probe = Arc::new(PostgresProbe::new(&config));
        Self::with_parts(Arc::new(SystemGenerator), probe)
    }

    /// Create a test application with sequential ids and a frozen clock
    pub fn deterministic() -> Self {
        Self::with_parts(
            Arc::new(FixedGenerator::new(
                "test-id",
                datetime!(2024-06-01 12:00:00 UTC),
            )),
            Arc::new(StaticProbe::up()),
        )
    }

    pub fn with_parts(generator: Arc<dyn Generator>, probe: Arc<dyn DatabaseProbe>) -> Self {
        Self::from_state(AppState::with_parts(test_config(), generator, probe))
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
