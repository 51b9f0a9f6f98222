// Application state for HTTP handlers
use crate::application::powerbi_service::PowerBiService;

#[derive(Clone)]
pub struct AppState {
    pub powerbi_service: PowerBiService,
}
