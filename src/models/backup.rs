use super::common::{null_as_default, Actor};
use serde::{Deserialize, Serialize};

/// Branch backup information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backup {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: f64,
    pub estimated_storage_cost: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: String,
    pub deleted_at: Option<String>,
    pub restored_branches: Option<Vec<String>>,
    pub actor: Option<Actor>,
    pub backup_policy: Option<BackupPolicy>,
    pub schema_snapshot: Option<SchemaSnapshot>,
    pub database_branch: Option<BackupBranch>,
}

/// Schedule that produced an automatic backup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupPolicy {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency_unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency_value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub retention_unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub retention_value: f64,
    pub schedule_day: Option<f64>,
    pub schedule_week: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub last_ran_at: Option<String>,
    pub next_run_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub linted_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupBranch {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Backup creation body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBackupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_value: Option<f64>,
}
