use super::common::{null_as_default, Actor, Patch, Region};
use serde::{Deserialize, Serialize};

/// Database information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plan: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branches_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub schema_last_updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ready: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sharded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub region: Region,
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch_read_only_regions_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch_shard_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch_table_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub branches_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub development_branches_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub production_branches_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub issues_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub at_backup_restore_branches_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub at_development_branch_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_data_branching: bool,
    pub automatic_migrations: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub insights_raw_queries: bool,
    pub migration_framework: Option<String>,
    pub migration_table_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub multiple_admins_required_for_deletion: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub production_branch_web_console: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub require_approval_for_deploy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub restrict_branch_region: bool,
    pub plan_size: Option<String>,
    pub data_import: Option<DataImport>,
}

/// Progress of an external data import into a database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataImport {
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub import_check_errors: String,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_source: DataSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSource {
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database: String,
}

/// Read-only replica region of a database's default branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOnlyRegion {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ready: bool,
    pub ready_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor: Actor,
    #[serde(deserialize_with = "null_as_default")]
    pub region: Region,
}

/// Database creation body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CreateDatabaseRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Database settings update body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDatabaseSettingsRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub allow_data_branching: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub automatic_migrations: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub default_branch: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub insights_raw_queries: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub migration_framework: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub migration_table_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub notes: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub production_branch_web_console: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub require_approval_for_deploy: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub restrict_branch_region: Patch<bool>,
}
