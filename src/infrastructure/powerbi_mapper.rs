// Power BI REST payloads and their mapping onto domain models
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedToken, ExportJob, Report};
use crate::domain::workspace::{Dataflow, Workspace};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// OData collection envelope used by every list endpoint
#[derive(Debug, Deserialize)]
pub struct ODataList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    pub id: Uuid,
    pub name: Option<String>,
    pub is_read_only: Option<bool>,
    pub is_on_dedicated_capacity: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub id: Uuid,
    pub name: Option<String>,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    pub dataset_id: Option<String>,
    pub report_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetPayload {
    pub id: Uuid,
    pub name: Option<String>,
    pub web_url: Option<String>,
    pub is_refreshable: Option<bool>,
    pub is_on_prem_gateway_required: Option<bool>,
    pub configured_by: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    pub is_read_only: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilePayload {
    pub id: Uuid,
    pub title: Option<String>,
    pub embed_url: Option<String>,
    pub report_id: Option<String>,
    pub dataset_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPayload {
    pub request_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub refresh_type: Option<String>,
    pub service_exception_json: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityPayload {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub sku: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPayload {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub public_key: Option<PublicKeyPayload>,
}

#[derive(Debug, Deserialize)]
pub struct PublicKeyPayload {
    pub exponent: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataflowPayload {
    pub object_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub configured_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedTokenPayload {
    pub token: String,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ExportPayload {
    pub id: String,
    pub status: Option<String>,
}

/// Absent and empty identifiers map to `None`; anything else must be a valid uuid.
fn optional_id(raw: Option<String>, field: &str) -> Result<Option<Uuid>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Uuid::parse_str(value)
            .map(Some)
            .with_context(|| format!("invalid {} '{}'", field, value)),
    }
}

pub fn map_all<P, T>(payloads: Vec<P>, map: fn(P) -> Result<T>) -> Result<Vec<T>> {
    payloads.into_iter().map(map).collect()
}

pub fn to_workspace(group: GroupPayload) -> Result<Workspace> {
    Ok(Workspace::new(
        group.id,
        group.name.unwrap_or_default(),
        group.is_read_only.unwrap_or(false),
        group.is_on_dedicated_capacity.unwrap_or(false),
    ))
}

pub fn to_report(report: ReportPayload) -> Result<Report> {
    Ok(Report {
        id: report.id,
        name: report.name.unwrap_or_default(),
        web_url: report.web_url,
        embed_url: report.embed_url,
        dataset_id: optional_id(report.dataset_id, "datasetId")?,
        report_type: report.report_type,
    })
}

pub fn to_dataset(dataset: DatasetPayload) -> Result<Dataset> {
    Ok(Dataset {
        id: dataset.id,
        name: dataset.name.unwrap_or_default(),
        web_url: dataset.web_url,
        is_refreshable: dataset.is_refreshable,
        is_on_prem_gateway_required: dataset.is_on_prem_gateway_required,
        configured_by: dataset.configured_by,
    })
}

pub fn to_dashboard(dashboard: DashboardPayload) -> Result<Dashboard> {
    Ok(Dashboard {
        id: dashboard.id,
        display_name: dashboard.display_name.unwrap_or_default(),
        web_url: dashboard.web_url,
        embed_url: dashboard.embed_url,
        is_read_only: dashboard.is_read_only.unwrap_or(false),
    })
}

pub fn to_tile(tile: TilePayload) -> Result<Tile> {
    Ok(Tile {
        id: tile.id,
        title: tile.title.unwrap_or_default(),
        embed_url: tile.embed_url,
        report_id: optional_id(tile.report_id, "reportId")?,
        dataset_id: optional_id(tile.dataset_id, "datasetId")?,
    })
}

pub fn to_refresh_entry(refresh: RefreshPayload) -> Result<RefreshHistoryEntry> {
    Ok(RefreshHistoryEntry {
        request_id: refresh.request_id,
        start_time: refresh.start_time,
        end_time: refresh.end_time,
        status: refresh.status,
        refresh_type: refresh.refresh_type,
        service_exception_json: refresh.service_exception_json,
    })
}

pub fn to_capacity(capacity: CapacityPayload) -> Result<Capacity> {
    Ok(Capacity {
        id: capacity.id,
        display_name: capacity.display_name.unwrap_or_default(),
        sku: capacity.sku,
        state: capacity.state,
        region: capacity.region,
    })
}

pub fn to_gateway(gateway: GatewayPayload) -> Result<Gateway> {
    Ok(Gateway {
        id: gateway.id,
        name: gateway.name.unwrap_or_default(),
        kind: gateway.kind,
        public_key: gateway.public_key.and_then(|key| key.exponent),
    })
}

pub fn to_dataflow(dataflow: DataflowPayload) -> Result<Dataflow> {
    Ok(Dataflow {
        object_id: dataflow.object_id,
        name: dataflow.name.unwrap_or_default(),
        description: dataflow.description,
        configured_by: dataflow.configured_by,
    })
}

pub fn to_embed_token(token: EmbedTokenPayload) -> EmbedToken {
    EmbedToken {
        token: token.token,
        expiration: token.expiration,
    }
}

pub fn to_export_job(export: ExportPayload) -> ExportJob {
    ExportJob {
        id: export.id,
        status: export.status.unwrap_or_else(|| "Unknown".to_string()),
    }
}
