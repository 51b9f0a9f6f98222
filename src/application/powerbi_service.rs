// Power BI service - One use case per proxied operation
use crate::application::errors::{AuthError, ServiceError};
use crate::application::powerbi_gateway::PowerBiGateway;
use crate::application::token_cache::TokenCache;
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedConfig, ExportFormat, ExportJob, Report};
use crate::domain::token::AccessToken;
use crate::domain::workspace::{Dataflow, Workspace, WorkspaceScope};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PowerBiService {
    tokens: Arc<TokenCache>,
    gateway: Arc<dyn PowerBiGateway>,
}

/// Log an upstream failure and wrap it
fn upstream(message: String) -> impl FnOnce(anyhow::Error) -> ServiceError {
    move |e| {
        tracing::error!("{}: {:#}", message, e);
        ServiceError::Upstream(e)
    }
}

impl PowerBiService {
    pub fn new(tokens: Arc<TokenCache>, gateway: Arc<dyn PowerBiGateway>) -> Self {
        Self { tokens, gateway }
    }

    pub async fn access_token(&self) -> Result<AccessToken, AuthError> {
        self.tokens.token().await
    }

    async fn authorize(&self) -> Result<String, ServiceError> {
        Ok(self.tokens.bearer().await?)
    }

    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_workspaces(&token)
            .await
            .map_err(upstream("Error getting workspaces".to_string()))
    }

    pub async fn list_reports(&self, scope: WorkspaceScope) -> Result<Vec<Report>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_reports(&token, scope)
            .await
            .map_err(upstream(format!("Error getting reports in {}", scope)))
    }

    pub async fn get_report(&self, workspace_id: Uuid, report_id: Uuid) -> Result<Report, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .get_report(&token, workspace_id, report_id)
            .await
            .map_err(upstream(format!("Error getting report {}", report_id)))
    }

    pub async fn list_datasets(&self, scope: WorkspaceScope) -> Result<Vec<Dataset>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_datasets(&token, scope)
            .await
            .map_err(upstream(format!("Error getting datasets in {}", scope)))
    }

    pub async fn list_dashboards(&self, scope: WorkspaceScope) -> Result<Vec<Dashboard>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_dashboards(&token, scope)
            .await
            .map_err(upstream(format!("Error getting dashboards in {}", scope)))
    }

    pub async fn list_tiles(&self, workspace_id: Uuid, dashboard_id: Uuid) -> Result<Vec<Tile>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_tiles(&token, workspace_id, dashboard_id)
            .await
            .map_err(upstream(format!("Error getting tiles for dashboard {}", dashboard_id)))
    }

    pub async fn refresh_history(
        &self,
        workspace_id: Uuid,
        dataset_id: Uuid,
    ) -> Result<Vec<RefreshHistoryEntry>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_refresh_history(&token, workspace_id, dataset_id)
            .await
            .map_err(upstream(format!("Error getting refresh history for dataset {}", dataset_id)))
    }

    pub async fn refresh_dataset(&self, workspace_id: Uuid, dataset_id: Uuid) -> Result<(), ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .refresh_dataset(&token, workspace_id, dataset_id)
            .await
            .map_err(upstream(format!("Error refreshing dataset {}", dataset_id)))?;

        tracing::info!("Refresh queued for dataset {}", dataset_id);
        Ok(())
    }

    /// Report metadata plus a view-only embed token
    pub async fn report_embed_config(
        &self,
        workspace_id: Uuid,
        report_id: Uuid,
    ) -> Result<EmbedConfig, ServiceError> {
        let token = self.authorize().await?;
        let on_error = || format!("Error getting embed config for report {}", report_id);

        let report = self
            .gateway
            .get_report(&token, workspace_id, report_id)
            .await
            .map_err(upstream(on_error()))?;
        let embed_token = self
            .gateway
            .generate_report_token(&token, workspace_id, report_id)
            .await
            .map_err(upstream(on_error()))?;

        Ok(EmbedConfig::new(report, embed_token))
    }

    pub async fn list_capacities(&self) -> Result<Vec<Capacity>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_capacities(&token)
            .await
            .map_err(upstream("Error getting capacities".to_string()))
    }

    pub async fn list_gateways(&self) -> Result<Vec<Gateway>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_gateways(&token)
            .await
            .map_err(upstream("Error getting gateways".to_string()))
    }

    pub async fn list_dataflows(&self, workspace_id: Uuid) -> Result<Vec<Dataflow>, ServiceError> {
        let token = self.authorize().await?;
        self.gateway
            .list_dataflows(&token, workspace_id)
            .await
            .map_err(upstream(format!("Error getting dataflows for workspace {}", workspace_id)))
    }

    pub async fn export_report(
        &self,
        workspace_id: Uuid,
        report_id: Uuid,
        format: ExportFormat,
    ) -> Result<ExportJob, ServiceError> {
        let token = self.authorize().await?;
        let job = self
            .gateway
            .export_report(&token, workspace_id, report_id, format)
            .await
            .map_err(upstream(format!("Error exporting report {}", report_id)))?;

        tracing::info!("Export {} started for report {} ({})", job.id, report_id, format.as_upstream());
        Ok(job)
    }
}
