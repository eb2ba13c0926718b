use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the daily summary: a direct report's activity for the day.
/// Employees with no check-ins still appear with zeroed counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDaySummary {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub checkins: u32,
    pub clients_visited: u32,
    pub working_hours: f64,
}

/// Team-level aggregate over all rows of the summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_employees: u32,
    pub total_checkins: u32,
    pub total_working_hours: f64,
    /// Distinct client sites visited across the whole team that day
    pub unique_clients_visited: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub team_summary: TeamSummary,
    pub employees: Vec<EmployeeDaySummary>,
}
