// Power BI REST API gateway implementation
use crate::application::powerbi_gateway::PowerBiGateway;
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedToken, ExportFormat, ExportJob, Report};
use crate::domain::workspace::{Dataflow, Workspace, WorkspaceScope};
use crate::infrastructure::powerbi_mapper::{self as mapper, ODataList};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PowerBiHttpClient {
    http: reqwest::Client,
    api_url: String,
}

fn group_path(workspace_id: Uuid) -> String {
    WorkspaceScope::Group(workspace_id).path()
}

impl PowerBiHttpClient {
    pub fn new(http: reqwest::Client, api_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> Result<reqwest::Response> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to Power BI ({})", path))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Power BI request {} failed with status {}: {}", path, status, body.trim());
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        let request = self.http.get(self.url(path)).bearer_auth(token);
        self.send(request, path)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse Power BI response ({})", path))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        tracing::debug!("POST {}", path);
        let request = self.http.post(self.url(path)).bearer_auth(token).json(body);
        self.send(request, path)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse Power BI response ({})", path))
    }

    async fn get_list<P: DeserializeOwned, T>(
        &self,
        token: &str,
        path: &str,
        map: fn(P) -> Result<T>,
    ) -> Result<Vec<T>> {
        let list = self.get_json::<ODataList<P>>(token, path).await?;
        mapper::map_all(list.value, map)
    }
}

#[async_trait]
impl PowerBiGateway for PowerBiHttpClient {
    async fn list_workspaces(&self, token: &str) -> Result<Vec<Workspace>> {
        self.get_list(token, "v1.0/myorg/groups", mapper::to_workspace).await
    }

    async fn list_reports(&self, token: &str, scope: WorkspaceScope) -> Result<Vec<Report>> {
        let path = format!("{}/reports", scope.path());
        self.get_list(token, &path, mapper::to_report).await
    }

    async fn get_report(&self, token: &str, workspace_id: Uuid, report_id: Uuid) -> Result<Report> {
        let path = format!("{}/reports/{}", group_path(workspace_id), report_id);
        mapper::to_report(self.get_json(token, &path).await?)
    }

    async fn list_datasets(&self, token: &str, scope: WorkspaceScope) -> Result<Vec<Dataset>> {
        let path = format!("{}/datasets", scope.path());
        self.get_list(token, &path, mapper::to_dataset).await
    }

    async fn list_dashboards(&self, token: &str, scope: WorkspaceScope) -> Result<Vec<Dashboard>> {
        let path = format!("{}/dashboards", scope.path());
        self.get_list(token, &path, mapper::to_dashboard).await
    }

    async fn list_tiles(&self, token: &str, workspace_id: Uuid, dashboard_id: Uuid) -> Result<Vec<Tile>> {
        let path = format!("{}/dashboards/{}/tiles", group_path(workspace_id), dashboard_id);
        self.get_list(token, &path, mapper::to_tile).await
    }

    async fn list_refresh_history(
        &self,
        token: &str,
        workspace_id: Uuid,
        dataset_id: Uuid,
    ) -> Result<Vec<RefreshHistoryEntry>> {
        let path = format!("{}/datasets/{}/refreshes", group_path(workspace_id), dataset_id);
        self.get_list(token, &path, mapper::to_refresh_entry).await
    }

    async fn refresh_dataset(&self, token: &str, workspace_id: Uuid, dataset_id: Uuid) -> Result<()> {
        let path = format!("{}/datasets/{}/refreshes", group_path(workspace_id), dataset_id);
        tracing::debug!("POST {}", path);
        // Accepted with an empty body
        let request = self
            .http
            .post(self.url(&path))
            .bearer_auth(token)
            .json(&json!({ "notifyOption": "NoNotification" }));
        self.send(request, &path).await?;
        Ok(())
    }

    async fn generate_report_token(
        &self,
        token: &str,
        workspace_id: Uuid,
        report_id: Uuid,
    ) -> Result<EmbedToken> {
        let path = format!("{}/reports/{}/GenerateToken", group_path(workspace_id), report_id);
        let body = json!({ "accessLevel": "View", "allowSaveAs": false });
        Ok(mapper::to_embed_token(self.post_json(token, &path, &body).await?))
    }

    async fn list_capacities(&self, token: &str) -> Result<Vec<Capacity>> {
        self.get_list(token, "v1.0/myorg/capacities", mapper::to_capacity).await
    }

    async fn list_gateways(&self, token: &str) -> Result<Vec<Gateway>> {
        self.get_list(token, "v1.0/myorg/gateways", mapper::to_gateway).await
    }

    async fn list_dataflows(&self, token: &str, workspace_id: Uuid) -> Result<Vec<Dataflow>> {
        let path = format!("{}/dataflows", group_path(workspace_id));
        self.get_list(token, &path, mapper::to_dataflow).await
    }

    async fn export_report(
        &self,
        token: &str,
        workspace_id: Uuid,
        report_id: Uuid,
        format: ExportFormat,
    ) -> Result<ExportJob> {
        let path = format!("{}/reports/{}/ExportTo", group_path(workspace_id), report_id);
        let body = json!({ "format": format.as_upstream() });
        Ok(mapper::to_export_job(self.post_json(token, &path, &body).await?))
    }
}
