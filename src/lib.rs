// Library crate for the API management service
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    delete_api, get_api, health, join_trial_waitlist, list_apis, list_health_checks,
    missing_api_id, register_api, root, service_status, submit_contact, subscribe_newsletter,
    update_api,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // API registry routes
    let api_routes = Router::new()
        .route("/api/v1/apis", get(list_apis))
        .route("/api/v1/apis", post(register_api))
        .route("/api/v1/apis/{api_id}", get(get_api))
        .route("/api/v1/apis/{api_id}", put(update_api))
        .route("/api/v1/apis/{api_id}", delete(delete_api))
        .route(
            "/api/v1/apis/{api_id}/health-checks",
            get(list_health_checks),
        )
        // Empty identifier
        .route(
            "/api/v1/apis/",
            get(missing_api_id).put(missing_api_id).delete(missing_api_id),
        );

    // Marketing form routes
    let marketing_routes = Router::new()
        .route("/api/v1/contact-submissions", post(submit_contact))
        .route("/api/v1/newsletter-subscriptions", post(subscribe_newsletter))
        .route("/api/v1/trial-waitlist", post(join_trial_waitlist));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/service-status", get(service_status))
        .merge(api_routes)
        .merge(marketing_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
