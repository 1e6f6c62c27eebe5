// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::view_service::ChartViewService;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: ChartService,
    pub view_service: ChartViewService,
}
