// HTTP request handlers
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedConfig, ExportFormat, Report};
use crate::domain::workspace::{Dataflow, Workspace, WorkspaceScope};
use crate::infrastructure::http_response::{ApiResult, TokenResponse};
use crate::presentation::app_state::AppState;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current access token for the Power BI API
pub async fn get_token(State(state): State<Arc<AppState>>) -> TokenResponse {
    TokenResponse::from(state.powerbi_service.access_token().await)
}

pub async fn list_workspaces(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Workspace>> {
    ApiResult::from_list(state.powerbi_service.list_workspaces().await)
}

pub async fn list_reports(
    Path(workspace_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Report>> {
    ApiResult::from_list(state.powerbi_service.list_reports(WorkspaceScope::Group(workspace_id)).await)
}

/// Reports in My workspace
pub async fn list_my_reports(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Report>> {
    ApiResult::from_list(state.powerbi_service.list_reports(WorkspaceScope::Personal).await)
}

pub async fn get_report(
    Path((workspace_id, report_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Report> {
    ApiResult::from_result(state.powerbi_service.get_report(workspace_id, report_id).await)
}

pub async fn list_datasets(
    Path(workspace_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Dataset>> {
    ApiResult::from_list(state.powerbi_service.list_datasets(WorkspaceScope::Group(workspace_id)).await)
}

/// Datasets in My workspace
pub async fn list_my_datasets(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Dataset>> {
    ApiResult::from_list(state.powerbi_service.list_datasets(WorkspaceScope::Personal).await)
}

pub async fn list_dashboards(
    Path(workspace_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Dashboard>> {
    ApiResult::from_list(state.powerbi_service.list_dashboards(WorkspaceScope::Group(workspace_id)).await)
}

/// Dashboards in My workspace
pub async fn list_my_dashboards(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Dashboard>> {
    ApiResult::from_list(state.powerbi_service.list_dashboards(WorkspaceScope::Personal).await)
}

pub async fn list_tiles(
    Path((workspace_id, dashboard_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Tile>> {
    ApiResult::from_list(state.powerbi_service.list_tiles(workspace_id, dashboard_id).await)
}

pub async fn refresh_history(
    Path((workspace_id, dataset_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RefreshHistoryEntry>> {
    ApiResult::from_list(state.powerbi_service.refresh_history(workspace_id, dataset_id).await)
}

/// Trigger a dataset refresh
pub async fn refresh_dataset(
    Path((workspace_id, dataset_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<bool> {
    let result = state.powerbi_service.refresh_dataset(workspace_id, dataset_id).await;
    ApiResult::from_result(result.map(|()| true))
}

pub async fn report_embed_config(
    Path((workspace_id, report_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<EmbedConfig> {
    ApiResult::from_result(state.powerbi_service.report_embed_config(workspace_id, report_id).await)
}

pub async fn list_capacities(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Capacity>> {
    ApiResult::from_list(state.powerbi_service.list_capacities().await)
}

pub async fn list_gateways(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Gateway>> {
    ApiResult::from_list(state.powerbi_service.list_gateways().await)
}

pub async fn list_dataflows(
    Path(workspace_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Dataflow>> {
    ApiResult::from_list(state.powerbi_service.list_dataflows(workspace_id).await)
}

/// Start an export; `format` is pdf (default), pptx or png
pub async fn export_report(
    Path((workspace_id, report_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ExportQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<String> {
    let format = ExportFormat::from_query(query.format.as_deref());
    let result = state
        .powerbi_service
        .export_report(workspace_id, report_id, format)
        .await;
    ApiResult::from_result(result.map(|job| job.to_string()))
}
