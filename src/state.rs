use std::sync::Arc;

use crate::config::Config;
use crate::services::AttendanceService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub attendance: Arc<AttendanceService>,
}
