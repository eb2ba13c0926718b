use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::auth::AuthenticatedEmployee;
use crate::libraries::checkin_policy::{CheckInPolicy, CheckInPolicyConfig};
use crate::models::{CheckInRequest, CheckInResponse};
use crate::state::AppState;

/// Open a check-in at a client site.
///
/// When the device reports GPS coordinates they are validated against the
/// registered site location and the distance is stored on the record;
/// check-ins without coordinates are accepted as-is.
pub async fn record_checkin(
    State(state): State<AppState>,
    AuthenticatedEmployee(employee): AuthenticatedEmployee,
    Json(request): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let client = state
        .attendance
        .client(&request.client_id)
        .await
        .ok_or(AppError::UnknownClient)?;

    let policy = CheckInPolicy::with_config(CheckInPolicyConfig {
        max_site_distance_km: state.config.max_site_distance_km,
    });
    let check = policy.evaluate(request.location.as_ref(), &client.site);

    debug!(
        "Check-in policy for {} at {} - passed: {}, distance: {:?} km",
        employee.name, client.name, check.passed, check.distance_km
    );

    if !check.passed {
        let message = check
            .error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Check-in rejected.".to_string());
        return Err(AppError::CheckInRejected(message));
    }

    let record = state
        .attendance
        .record_checkin(employee.id, client.id, request.location, check.distance_km)
        .await;

    info!(
        "Employee {} checked in at client {} ({})",
        employee.name, client.name, record.id
    );

    Ok(Json(CheckInResponse::ok(record)))
}

/// Close the caller's open check-in
pub async fn record_checkout(
    State(state): State<AppState>,
    AuthenticatedEmployee(employee): AuthenticatedEmployee,
    Path(checkin_id): Path<Uuid>,
) -> Result<Json<CheckInResponse>, AppError> {
    let record = state
        .attendance
        .record_checkout(checkin_id, employee.id)
        .await?;

    info!("Employee {} checked out of {}", employee.name, record.id);

    Ok(Json(CheckInResponse::ok(record)))
}
