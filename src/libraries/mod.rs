pub mod checkin_policy;
pub mod geodistance;
