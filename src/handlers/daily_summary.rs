use std::sync::LazyLock;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::AppError;
use crate::handlers::auth::ManagerIdentity;
use crate::models::{DailySummaryParams, DailySummaryResponse};
use crate::state::AppState;

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Daily check-in summary for the authenticated manager's direct reports.
///
/// Requires a `date` query parameter in `YYYY-MM-DD` form; the shape is
/// checked first so the error message distinguishes a missing parameter
/// from a malformed one, then the value must parse as a real calendar
/// date. An optional `employee_id` restricts the report to one employee.
pub async fn daily_summary(
    State(state): State<AppState>,
    ManagerIdentity(manager): ManagerIdentity,
    Query(params): Query<DailySummaryParams>,
) -> Result<Json<DailySummaryResponse>, AppError> {
    let raw = params.date.ok_or(AppError::MissingDate)?;

    if !DATE_FORMAT.is_match(&raw) {
        return Err(AppError::InvalidDateFormat);
    }
    let date =
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| AppError::InvalidDateFormat)?;

    debug!(
        "Daily summary for manager {} on {} (filter: {:?})",
        manager.name, date, params.employee_id
    );

    let summary = state
        .attendance
        .daily_summary(manager.id, date, params.employee_id)
        .await;

    Ok(Json(DailySummaryResponse::success(summary)))
}
