pub mod checkin;
pub mod geo;
pub mod report;
pub mod requests;
pub mod staff;

// Re-export commonly used types
pub use checkin::CheckIn;
pub use geo::GeoPoint;
pub use report::{DailySummary, EmployeeDaySummary, TeamSummary};
pub use requests::{CheckInRequest, CheckInResponse, DailySummaryParams, DailySummaryResponse};
pub use staff::{Client, Employee, Role};
