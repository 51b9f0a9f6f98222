// Dashboard domain models
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: Uuid,
    pub display_name: String,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    pub is_read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: Uuid,
    pub title: String,
    pub embed_url: Option<String>,
    pub report_id: Option<Uuid>,
    pub dataset_id: Option<Uuid>,
}
