// In-memory stand-ins for the identity provider, the clock and the Power BI API
use crate::application::errors::AuthError;
use crate::application::identity_client::IdentityClient;
use crate::application::powerbi_gateway::PowerBiGateway;
use crate::application::token_cache::Clock;
use crate::domain::capacity::{Capacity, Gateway};
use crate::domain::dashboard::{Dashboard, Tile};
use crate::domain::dataset::{Dataset, RefreshHistoryEntry};
use crate::domain::report::{EmbedToken, ExportFormat, ExportJob, Report};
use crate::domain::token::AccessToken;
use crate::domain::workspace::{Dataflow, Workspace, WorkspaceScope};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct FakeIdentity {
    clock: Arc<ManualClock>,
    lifetime: Duration,
    issued: AtomicUsize,
    failure: Mutex<Option<AuthError>>,
}

impl FakeIdentity {
    pub fn new(clock: Arc<ManualClock>, lifetime: Duration) -> Self {
        Self {
            clock,
            lifetime,
            issued: AtomicUsize::new(0),
            failure: Mutex::new(None),
        }
    }

    pub fn failing(error: AuthError) -> Self {
        let identity = Self::new(Arc::new(ManualClock::default()), Duration::hours(1));
        identity.fail_with(error);
        identity
    }

    pub fn fail_with(&self, error: AuthError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Number of token requests seen, failed ones included
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityClient for FakeIdentity {
    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(AccessToken::new(
            format!("token-{}", n),
            self.clock.now() + self.lifetime,
        ))
    }
}

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Canned Power BI tenant. Counts every call and remembers what it was asked.
#[derive(Default)]
pub struct FakeGateway {
    calls: AtomicUsize,
    fail: bool,
    pub last_token: Mutex<Option<String>>,
    pub last_scope: Mutex<Option<WorkspaceScope>>,
    pub last_export_format: Mutex<Option<ExportFormat>>,
}

impl FakeGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, token: &str) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(token.to_string());
        if self.fail {
            anyhow::bail!("Power BI request failed with status 403 Forbidden: PowerBINotAuthorizedException");
        }
        Ok(())
    }

    pub fn report(n: u128, dataset: Option<u128>) -> Report {
        Report {
            id: id(n),
            name: format!("Report {}", n),
            web_url: Some(format!("https://app.powerbi.com/reports/{}", id(n))),
            embed_url: Some(format!("https://app.powerbi.com/reportEmbed?reportId={}", id(n))),
            dataset_id: dataset.map(id),
            report_type: Some("PowerBIReport".to_string()),
        }
    }
}

#[async_trait]
impl PowerBiGateway for FakeGateway {
    async fn list_workspaces(&self, token: &str) -> anyhow::Result<Vec<Workspace>> {
        self.record(token)?;
        Ok(vec![
            Workspace::new(id(1), "Finance".to_string(), false, true),
            Workspace::new(id(2), "Marketing".to_string(), true, false),
        ])
    }

    async fn list_reports(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Report>> {
        self.record(token)?;
        *self.last_scope.lock().unwrap() = Some(scope);
        Ok(vec![
            Self::report(10, Some(20)),
            Self::report(11, None),
            Self::report(12, Some(21)),
        ])
    }

    async fn get_report(&self, token: &str, _workspace_id: Uuid, report_id: Uuid) -> anyhow::Result<Report> {
        self.record(token)?;
        Ok(Self::report(report_id.as_u128(), Some(20)))
    }

    async fn list_datasets(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Dataset>> {
        self.record(token)?;
        *self.last_scope.lock().unwrap() = Some(scope);
        Ok(vec![Dataset {
            id: id(20),
            name: "Sales Model".to_string(),
            web_url: None,
            is_refreshable: Some(true),
            is_on_prem_gateway_required: Some(false),
            configured_by: Some("admin@contoso.com".to_string()),
        }])
    }

    async fn list_dashboards(&self, token: &str, scope: WorkspaceScope) -> anyhow::Result<Vec<Dashboard>> {
        self.record(token)?;
        *self.last_scope.lock().unwrap() = Some(scope);
        Ok(vec![Dashboard {
            id: id(30),
            display_name: "Executive".to_string(),
            web_url: None,
            embed_url: None,
            is_read_only: false,
        }])
    }

    async fn list_tiles(&self, token: &str, _workspace_id: Uuid, _dashboard_id: Uuid) -> anyhow::Result<Vec<Tile>> {
        self.record(token)?;
        Ok(vec![
            Tile {
                id: id(40),
                title: "Revenue".to_string(),
                embed_url: None,
                report_id: Some(id(10)),
                dataset_id: Some(id(20)),
            },
            Tile {
                id: id(41),
                title: "Margin".to_string(),
                embed_url: None,
                report_id: None,
                dataset_id: None,
            },
        ])
    }

    async fn list_refresh_history(
        &self,
        token: &str,
        _workspace_id: Uuid,
        _dataset_id: Uuid,
    ) -> anyhow::Result<Vec<RefreshHistoryEntry>> {
        self.record(token)?;
        Ok(vec![RefreshHistoryEntry {
            request_id: Some("9399bb89-25d1-44f8-8576-136d7e9014b1".to_string()),
            start_time: Some(Utc.with_ymd_and_hms(2026, 10, 17, 6, 0, 0).unwrap()),
            end_time: Some(Utc.with_ymd_and_hms(2026, 10, 17, 6, 3, 12).unwrap()),
            status: Some("Completed".to_string()),
            refresh_type: Some("Scheduled".to_string()),
            service_exception_json: None,
        }])
    }

    async fn refresh_dataset(&self, token: &str, _workspace_id: Uuid, _dataset_id: Uuid) -> anyhow::Result<()> {
        self.record(token)
    }

    async fn generate_report_token(
        &self,
        token: &str,
        _workspace_id: Uuid,
        _report_id: Uuid,
    ) -> anyhow::Result<EmbedToken> {
        self.record(token)?;
        Ok(EmbedToken {
            token: "H4sIAAAAAAAEAB2Wxa7r".to_string(),
            expiration: Some(Utc.with_ymd_and_hms(2026, 10, 18, 13, 0, 0).unwrap()),
        })
    }

    async fn list_capacities(&self, token: &str) -> anyhow::Result<Vec<Capacity>> {
        self.record(token)?;
        Ok(vec![Capacity {
            id: id(50),
            display_name: "Premium P1".to_string(),
            sku: Some("P1".to_string()),
            state: Some("Active".to_string()),
            region: Some("West Europe".to_string()),
        }])
    }

    async fn list_gateways(&self, token: &str) -> anyhow::Result<Vec<Gateway>> {
        self.record(token)?;
        Ok(Vec::new())
    }

    async fn list_dataflows(&self, token: &str, _workspace_id: Uuid) -> anyhow::Result<Vec<Dataflow>> {
        self.record(token)?;
        Ok(vec![Dataflow {
            object_id: id(60),
            name: "Customers".to_string(),
            description: None,
            configured_by: None,
        }])
    }

    async fn export_report(
        &self,
        token: &str,
        _workspace_id: Uuid,
        _report_id: Uuid,
        format: ExportFormat,
    ) -> anyhow::Result<ExportJob> {
        self.record(token)?;
        *self.last_export_format.lock().unwrap() = Some(format);
        Ok(ExportJob {
            id: "Mi9C5419i".to_string(),
            status: "NotStarted".to_string(),
        })
    }
}
