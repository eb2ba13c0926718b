use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::GeoPoint;

/// A single attendance record: one visit to one client site.
/// `checkout_time` stays empty until the employee checks out; open records
/// contribute zero working hours to the daily summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub client_id: Uuid,
    pub checkin_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_time: Option<DateTime<Utc>>,
    /// GPS coordinates reported by the device, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Great-circle distance from the client site in km, when a location
    /// was reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_distance_km: Option<f64>,
}

impl CheckIn {
    pub fn new(employee_id: Uuid, client_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            client_id,
            checkin_time: Utc::now(),
            checkout_time: None,
            location: None,
            site_distance_km: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.checkout_time.is_none()
    }

    /// Hours between check-in and checkout, zero while the record is open
    pub fn worked_hours(&self) -> f64 {
        match self.checkout_time {
            Some(checkout) => (checkout - self.checkin_time).num_seconds() as f64 / 3600.0,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_worked_hours_open_record() {
        let record = CheckIn::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(record.is_open());
        assert_eq!(record.worked_hours(), 0.0);
    }

    #[test]
    fn test_worked_hours_closed_record() {
        let mut record = CheckIn::new(Uuid::new_v4(), Uuid::new_v4());
        record.checkin_time = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        record.checkout_time = Some(Utc.with_ymd_and_hms(2025, 3, 14, 17, 30, 0).unwrap());

        assert!(!record.is_open());
        assert_eq!(record.worked_hours(), 8.5);
    }
}
