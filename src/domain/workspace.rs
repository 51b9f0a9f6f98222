// Workspace domain models
use serde::Serialize;
use uuid::Uuid;

/// Where a workspace-scoped listing is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceScope {
    /// The caller's personal workspace ("My workspace")
    Personal,
    Group(Uuid),
}

impl WorkspaceScope {
    /// API path prefix, relative to the API root
    pub fn path(&self) -> String {
        match self {
            WorkspaceScope::Personal => "v1.0/myorg".to_string(),
            WorkspaceScope::Group(id) => format!("v1.0/myorg/groups/{}", id),
        }
    }
}

impl std::fmt::Display for WorkspaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceScope::Personal => f.write_str("My workspace"),
            WorkspaceScope::Group(id) => write!(f, "workspace {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub is_read_only: bool,
    pub is_on_dedicated_capacity: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Workspace {
    pub fn new(id: Uuid, name: String, is_read_only: bool, is_on_dedicated_capacity: bool) -> Self {
        Self {
            id,
            name,
            is_read_only,
            is_on_dedicated_capacity,
            kind: "Workspace".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataflow {
    pub object_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub configured_by: Option<String>,
}
