// Gateway trait for Power BI REST API access
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedToken, ExportFormat, ExportJob, Report};
use crate::domain::workspace::{Dataflow, Workspace, WorkspaceScope};
use async_trait::async_trait;
use uuid::Uuid;

/// One method per upstream endpoint. Every call takes the bearer token to send.
#[async_trait]
pub trait PowerBiGateway: Send + Sync {
    async fn list_workspaces(&self, token: &str) -> anyhow::Result<Vec<Workspace>>;

    async fn list_reports(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Report>>;

    async fn get_report(&self, token: &str, workspace_id: Uuid, report_id: Uuid) -> anyhow::Result<Report>;

    async fn list_datasets(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Dataset>>;

    async fn list_dashboards(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Dashboard>>;

    async fn list_tiles(&self, token: &str, workspace_id: Uuid, dashboard_id: Uuid) -> anyhow::Result<Vec<Tile>>;

    async fn list_refresh_history(
        &self,
        token: &str,
        workspace_id: Uuid,
        dataset_id: Uuid,
    ) -> anyhow::Result<Vec<RefreshHistoryEntry>>;

    /// Queue an asynchronous refresh of the dataset
    async fn refresh_dataset(&self, token: &str, workspace_id: Uuid, dataset_id: Uuid) -> anyhow::Result<()>;

    /// Generate a view-only embed token for a report
    async fn generate_report_token(
        &self,
        token: &str,
        workspace_id: Uuid,
        report_id: Uuid,
    ) -> anyhow::Result<EmbedToken>;

    async fn list_capacities(&self, token: &str) -> anyhow::Result<Vec<Capacity>>;

    async fn list_gateways(&self, token: &str) -> anyhow::Result<Vec<Gateway>>;

    async fn list_dataflows(&self, token: &str, workspace_id: Uuid) -> anyhow::Result<Vec<Dataflow>>;

    /// Start an export-to-file job
    async fn export_report(
        &self,
        token: &str,
        workspace_id: Uuid,
        report_id: Uuid,
        format: ExportFormat,
    ) -> anyhow::Result<ExportJob>;
}
