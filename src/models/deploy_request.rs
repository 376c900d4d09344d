use super::common::{null_as_default, Actor, Patch};
use serde::{Deserialize, Serialize};

/// Deploy request information
///
/// `state` is one of `open` or `closed`; the progress of the underlying
/// schema change is tracked in `deployment_state`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub approved: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch_deleted: bool,
    pub branch_deleted_at: Option<String>,
    pub branch_deleted_by: Option<Actor>,
    #[serde(deserialize_with = "null_as_default")]
    pub into_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub into_branch_sharded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub into_branch_shard_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub deployed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub actor: Actor,
    pub closed_by: Option<Actor>,
    pub deployment: Option<Deployment>,
}

/// Deployment backing a deploy request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_request_number: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub into_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auto_cutover: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub deployable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub instant_ddl: bool,
    pub instant_ddl_eligible: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub cutover_expiring: bool,
    pub table_locked: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub queued_at: Option<String>,
    pub submitted_at: Option<String>,
    pub started_at: Option<String>,
    pub ready_to_revert_at: Option<String>,
    pub cutover_at: Option<String>,
    pub finished_at: Option<String>,
    pub deploy_check_errors: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub lint_errors: Vec<DeploymentLintError>,
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_operations: Vec<DeployOperation>,
    #[serde(deserialize_with = "null_as_default")]
    pub preceding_deployments: Vec<QueuedDeployment>,
    #[serde(deserialize_with = "null_as_default")]
    pub sequential_diff_dependencies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentLintError {
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
}

/// Entry of a database's deploy queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueuedDeployment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_request_number: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub into_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auto_cutover: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub queued_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub cutover_at: Option<String>,
}

/// A single DDL operation of a deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployOperation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keyspace_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub table_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operation_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ddl_statement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub syntax_highlighted_ddl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eta_seconds: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub progress_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub can_drop_data: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub table_recently_used: bool,
    pub table_recently_used_at: Option<String>,
    pub deploy_errors: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Review left on a deploy request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployReview {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor: Actor,
}

/// Deploy request creation body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDeployRequestRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub into_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Deploy request update body, used to close a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseDeployRequestRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub state: Patch<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAutoApplyRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub enable: Patch<bool>,
}

/// Review body. `state` is `approved` or `commented`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDeployRequestRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Filters for listing deploy requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDeployRequestsQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub state: Option<String>,
    pub branch: Option<String>,
    pub into_branch: Option<String>,
}
