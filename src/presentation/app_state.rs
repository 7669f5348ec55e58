// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub refresh_interval: Duration,
}
