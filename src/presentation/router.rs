// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/token", get(handlers::get_token))
        .route("/workspaces", get(handlers::list_workspaces))
        .route("/workspaces/:workspace_id/reports", get(handlers::list_reports))
        .route("/workspaces/:workspace_id/reports/:report_id", get(handlers::get_report))
        .route("/workspaces/:workspace_id/reports/:report_id/embed", get(handlers::report_embed_config))
        .route("/workspaces/:workspace_id/reports/:report_id/export", post(handlers::export_report))
        .route("/workspaces/:workspace_id/datasets", get(handlers::list_datasets))
        .route(
            "/workspaces/:workspace_id/datasets/:dataset_id/refreshes",
            get(handlers::refresh_history),
        )
        .route(
            "/workspaces/:workspace_id/datasets/:dataset_id/refresh",
            post(handlers::refresh_dataset),
        )
        .route("/workspaces/:workspace_id/dashboards", get(handlers::list_dashboards))
        .route(
            "/workspaces/:workspace_id/dashboards/:dashboard_id/tiles",
            get(handlers::list_tiles),
        )
        .route("/workspaces/:workspace_id/dataflows", get(handlers::list_dataflows))
        .route("/reports", get(handlers::list_my_reports))
        .route("/datasets", get(handlers::list_my_datasets))
        .route("/dashboards", get(handlers::list_my_dashboards))
        .route("/capacities", get(handlers::list_capacities))
        .route("/gateways", get(handlers::list_gateways));

    Router::new()
        .route("/healthz", get(handlers::health_check))
        .nest("/api/powerbi", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
