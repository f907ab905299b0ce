use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::repositories::{
    ApiRepository, DiscardingSubmissionRepository, SubmissionRepository, SyntheticApiRepository,
};
use crate::services::{DatabaseProbe, Generator, PostgresProbe, SystemGenerator};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process start, for uptime reporting
    pub started_at: Instant,
    pub generator: Arc<dyn Generator>,
    /// Database liveness probe used by the status endpoints
    pub probe: Arc<dyn DatabaseProbe>,
    pub apis: Arc<dyn ApiRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
}

impl AppState {
    /// Create a new AppState with the production collaborators
    pub fn new(config: Config) -> Self {
        let generator: Arc<dyn Generator> = Arc::new(SystemGenerator);
        let probe: Arc<dyn DatabaseProbe> = Arc::new(PostgresProbe::new(&config));

        Self::with_parts(config, generator, probe)
    }

    /// Create AppState with a custom generator and probe (for testing)
    pub fn with_parts(
        config: Config,
        generator: Arc<dyn Generator>,
        probe: Arc<dyn DatabaseProbe>,
    ) -> Self {
        let apis: Arc<dyn ApiRepository> =
            Arc::new(SyntheticApiRepository::new(generator.clone()));
        let submissions: Arc<dyn SubmissionRepository> =
            Arc::new(DiscardingSubmissionRepository::new(generator.clone()));

        Self::with_repositories(config, generator, probe, apis, submissions)
    }

    /// Create AppState with every collaborator supplied by the caller
    pub fn with_repositories(
        config: Config,
        generator: Arc<dyn Generator>,
        probe: Arc<dyn DatabaseProbe>,
        apis: Arc<dyn ApiRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            config,
            started_at: Instant::now(),
            generator,
            probe,
            apis,
            submissions,
        }
    }

    /// Seconds since the state was created
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
