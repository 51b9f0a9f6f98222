// Report domain models - reports, embedding and export
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub name: String,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    pub dataset_id: Option<Uuid>,
    pub report_type: Option<String>,
}

/// Embed token issued for a single report
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedToken {
    pub token: String,
    pub expiration: Option<DateTime<Utc>>,
}

/// Everything a browser needs to render a report outside the portal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfig {
    pub report_id: Option<String>,
    pub report_name: Option<String>,
    pub embed_url: Option<String>,
    pub embed_token: Option<String>,
    pub token_expiry: Option<DateTime<Utc>>,
}

impl EmbedConfig {
    pub fn new(report: Report, token: EmbedToken) -> Self {
        Self {
            report_id: Some(report.id.to_string()),
            report_name: Some(report.name),
            embed_url: report.embed_url,
            embed_token: Some(token.token),
            token_expiry: token.expiration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Pptx,
    Png,
}

impl ExportFormat {
    /// Parse the `format` query value. Absent or unknown values fall back to PDF.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("pptx") => ExportFormat::Pptx,
            Some("png") => ExportFormat::Png,
            _ => ExportFormat::Pdf,
        }
    }

    /// Format name as the export API expects it
    pub fn as_upstream(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Pptx => "PPTX",
            ExportFormat::Png => "PNG",
        }
    }
}

/// An export-to-file job accepted by the service
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub id: String,
    pub status: String,
}

impl std::fmt::Display for ExportJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Export initiated. Export ID: {}, Status: {}", self.id, self.status)
    }
}
