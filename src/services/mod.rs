pub mod attendance;

pub use attendance::{AttendanceError, AttendanceService};
