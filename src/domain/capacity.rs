// Tenant-level resources - capacities and gateways
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub id: Uuid,
    pub display_name: String,
    pub sku: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Exponent of the gateway's public key
    pub public_key: Option<String>,
}
