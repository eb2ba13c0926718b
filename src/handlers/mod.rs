pub mod auth;
pub mod checkin;
pub mod daily_summary;

use axum::{response::IntoResponse, Json};

pub use auth::{AuthenticatedEmployee, ManagerIdentity};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "attendance-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
