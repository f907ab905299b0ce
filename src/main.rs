use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_management::config::{Config, LogFormat};
use api_management::handlers::{
    ApiListResponse, ApiResponse, ContactSubmissionRequest, ContactSubmissionResponse,
    HealthCheckListResponse, HealthCheckResponse, HealthResponse, MessageResponse,
    NewsletterSubscriptionRequest, NewsletterSubscriptionResponse, RegisterApiRequest,
    RootResponse, ServiceState, ServiceStatusResponse, TrialWaitlistRequest,
    TrialWaitlistResponse,
};
use api_management::models::{HealthCheckDetails, HealthStatus};
use api_management::services::DatabaseStatus;
use api_management::state::AppState;
use api_management::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diagnyx API Management Service",
        description = "API management service for the Diagnyx platform",
        version = "1.0.0"
    ),
    paths(
        handlers::status::root,
        handlers::status::health,
        handlers::status::service_status,
        handlers::api::register_api,
        handlers::api::list_apis,
        handlers::api::get_api,
        handlers::api::update_api,
        handlers::api::delete_api,
        handlers::api::list_health_checks,
        handlers::submission::submit_contact,
        handlers::submission::subscribe_newsletter,
        handlers::submission::join_trial_waitlist,
    ),
    components(schemas(
        RootResponse,
        HealthResponse,
        ServiceStatusResponse,
        ServiceState,
        DatabaseStatus,
        RegisterApiRequest,
        ApiResponse,
        ApiListResponse,
        MessageResponse,
        HealthCheckResponse,
        HealthCheckListResponse,
        HealthCheckDetails,
        HealthStatus,
        ContactSubmissionRequest,
        ContactSubmissionResponse,
        NewsletterSubscriptionRequest,
        NewsletterSubscriptionResponse,
        TrialWaitlistRequest,
        TrialWaitlistResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "APIs", description = "API registration and health history endpoints"),
        (name = "Marketing", description = "Contact, newsletter and trial waitlist forms")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("api_management=info,tower_http=info"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    let addr = config.server_addr();
    tracing::info!(
        db_host = %config.db_host,
        db_port = config.db_port,
        db_name = %config.db_name,
        "Database probe target configured"
    );

    let state = AppState::new(config);

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/docs/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
