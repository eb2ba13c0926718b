use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checkin::CheckIn;
use super::geo::GeoPoint;
use super::report::DailySummary;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub client_id: Uuid,
    /// Device GPS fix, optional in the field app
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub success: bool,
    pub data: CheckIn,
}

impl CheckInResponse {
    pub fn ok(record: CheckIn) -> Self {
        Self {
            success: true,
            data: record,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailySummaryParams {
    /// Report date, `YYYY-MM-DD`. Kept as a raw string so the handler can
    /// produce the documented 400 messages instead of a generic query
    /// rejection.
    pub date: Option<String>,
    /// Restrict the summary to a single direct report
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummaryResponse {
    pub success: bool,
    pub data: DailySummary,
}

impl DailySummaryResponse {
    pub fn success(summary: DailySummary) -> Self {
        Self {
            success: true,
            data: summary,
        }
    }
}
