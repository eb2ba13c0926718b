pub mod config;
pub mod error;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::checkin::{record_checkin, record_checkout};
use handlers::daily_summary::daily_summary;
use handlers::health;
use state::AppState;

/// Build the service router. Split out of `main` so integration tests can
/// drive the full HTTP surface in-process.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/checkins", post(record_checkin))
        .route("/api/checkins/:id/checkout", post(record_checkout))
        .route("/api/reports/daily-summary", get(daily_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
