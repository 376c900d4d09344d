use super::common::{null_as_default, Actor, Region};
use serde::{Deserialize, Serialize};

/// Database branch information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub state: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub deleted_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    pub access_host_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mysql_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mysql_edge_address: String,
    pub mysql_provider_address: Option<String>,
    pub parent_branch: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub production: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ready: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub safe_migrations: bool,
    pub schema_ready: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub sharded: bool,
    pub shard_count: Option<f64>,
    pub stale_schema: Option<bool>,
    pub initial_restore_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cluster_rate_name: String,
    pub restore_checklist_completed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub schema_last_updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: Region,
    pub actor: Option<Actor>,
    pub restored_from_branch: Option<RestoredFromBranch>,
}

/// Backup a branch was restored from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoredFromBranch {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Branch creation body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBranchRequest {
    pub name: String,
    pub parent_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,
}

impl CreateBranchRequest {
    pub fn new(name: impl Into<String>, parent_branch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_branch: parent_branch.into(),
            backup_id: None,
        }
    }
}

/// Schema of a branch, one entry per table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchSchema {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<TableSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSchema {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub raw: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html: String,
}

/// A schema lint finding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaLintError {
    #[serde(deserialize_with = "null_as_default")]
    pub lint_error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub docs_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keyspace_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub table_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub column_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub charset_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enum_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub json_path: String,
    pub vindex_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub check_constraint_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partition_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partitioning_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auto_increment_column_names: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub foreign_key_column_names: Vec<String>,
}
