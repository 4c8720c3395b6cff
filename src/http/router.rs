//! Router configuration for the wizard.

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Create the application router with the three wizard routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::config_page).post(handlers::submit_config),
        )
        .route(
            "/select_days",
            get(handlers::select_days_page).post(handlers::submit_days),
        )
        .route(
            "/verify_schedule",
            get(handlers::verify_schedule_page).post(handlers::submit_verify),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
