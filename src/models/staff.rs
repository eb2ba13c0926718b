use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Employee,
}

/// A roster member. Managers see the daily summary of their direct reports;
/// everyone on the roster can record check-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// Manager this employee reports to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Uuid>,
    /// Bearer token used to authenticate API calls
    #[serde(skip_serializing)]
    pub api_token: String,
}

/// A client site employees check in at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub site: GeoPoint,
}
