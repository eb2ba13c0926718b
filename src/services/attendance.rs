use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::libraries::geodistance::round2;
use crate::models::{
    CheckIn, Client, DailySummary, Employee, EmployeeDaySummary, GeoPoint, TeamSummary,
};

#[derive(Debug, Clone, Error)]
pub enum AttendanceError {
    #[error("Check-in not found.")]
    CheckInNotFound,

    #[error("Check-in belongs to another employee.")]
    NotRecordOwner,

    #[error("Check-in is already closed.")]
    AlreadyCheckedOut,
}

#[derive(Default)]
struct AttendanceData {
    employees: HashMap<Uuid, Employee>,
    clients: HashMap<Uuid, Client>,
    checkins: HashMap<Uuid, CheckIn>,
}

/// Roster and check-in log. In-memory storage; the upstream HR database
/// is an external collaborator that hydrates this via `register_*` and
/// `insert_checkin`.
pub struct AttendanceService {
    data: Arc<RwLock<AttendanceData>>,
}

impl AttendanceService {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(AttendanceData::default())),
        }
    }

    pub async fn register_employee(&self, employee: Employee) {
        let mut data = self.data.write().await;
        data.employees.insert(employee.id, employee);
    }

    pub async fn register_client(&self, client: Client) {
        let mut data = self.data.write().await;
        data.clients.insert(client.id, client);
    }

    pub async fn employee_by_token(&self, token: &str) -> Option<Employee> {
        let data = self.data.read().await;
        data.employees
            .values()
            .find(|e| e.api_token == token)
            .cloned()
    }

    pub async fn client(&self, id: &Uuid) -> Option<Client> {
        let data = self.data.read().await;
        data.clients.get(id).cloned()
    }

    /// Open a new check-in for an employee at a client site
    pub async fn record_checkin(
        &self,
        employee_id: Uuid,
        client_id: Uuid,
        location: Option<GeoPoint>,
        site_distance_km: Option<f64>,
    ) -> CheckIn {
        let record = CheckIn {
            location,
            site_distance_km,
            ..CheckIn::new(employee_id, client_id)
        };

        let mut data = self.data.write().await;
        data.checkins.insert(record.id, record.clone());
        record
    }

    /// Close an open check-in. Only the employee who opened the record
    /// may close it.
    pub async fn record_checkout(
        &self,
        checkin_id: Uuid,
        employee_id: Uuid,
    ) -> Result<CheckIn, AttendanceError> {
        let mut data = self.data.write().await;
        let record = data
            .checkins
            .get_mut(&checkin_id)
            .ok_or(AttendanceError::CheckInNotFound)?;

        if record.employee_id != employee_id {
            return Err(AttendanceError::NotRecordOwner);
        }
        if !record.is_open() {
            return Err(AttendanceError::AlreadyCheckedOut);
        }

        record.checkout_time = Some(Utc::now());
        Ok(record.clone())
    }

    /// Backfill a fully-formed record, e.g. when hydrating from an
    /// upstream source
    pub async fn insert_checkin(&self, record: CheckIn) {
        let mut data = self.data.write().await;
        data.checkins.insert(record.id, record);
    }

    /// Daily check-in summary for a manager's direct reports.
    ///
    /// Every direct report gets a row, including those with no activity
    /// that day. Working hours only count closed records; open check-ins
    /// contribute zero until checkout.
    pub async fn daily_summary(
        &self,
        manager_id: Uuid,
        date: NaiveDate,
        employee_filter: Option<Uuid>,
    ) -> DailySummary {
        let data = self.data.read().await;

        let mut reports: Vec<&Employee> = data
            .employees
            .values()
            .filter(|e| e.manager_id == Some(manager_id))
            .filter(|e| employee_filter.map_or(true, |id| e.id == id))
            .collect();
        reports.sort_by(|a, b| a.name.cmp(&b.name));

        let mut employees = Vec::with_capacity(reports.len());
        let mut team_clients: HashSet<Uuid> = HashSet::new();

        for employee in reports {
            let day_records: Vec<&CheckIn> = data
                .checkins
                .values()
                .filter(|c| {
                    c.employee_id == employee.id && c.checkin_time.date_naive() == date
                })
                .collect();

            let clients: HashSet<Uuid> = day_records.iter().map(|c| c.client_id).collect();
            team_clients.extend(&clients);

            let working_hours =
                round2(day_records.iter().map(|c| c.worked_hours()).sum::<f64>());

            employees.push(EmployeeDaySummary {
                employee_id: employee.id,
                employee_name: employee.name.clone(),
                checkins: day_records.len() as u32,
                clients_visited: clients.len() as u32,
                working_hours,
            });
        }

        let team_summary = TeamSummary {
            total_employees: employees.len() as u32,
            total_checkins: employees.iter().map(|e| e.checkins).sum(),
            total_working_hours: round2(employees.iter().map(|e| e.working_hours).sum()),
            unique_clients_visited: team_clients.len() as u32,
        };

        DailySummary {
            date,
            team_summary,
            employees,
        }
    }
}

impl Default for AttendanceService {
    fn default() -> Self {
        Self::new()
    }
}
