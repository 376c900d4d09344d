use super::common::{null_as_default, Actor, Region};
use serde::{Deserialize, Serialize};

/// Branch password information
///
/// `plain_text` is only ever returned by create and renew.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Password {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    pub username: Option<String>,
    pub plain_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub access_host_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub expires_at: Option<String>,
    pub deleted_at: Option<String>,
    pub last_used_at: Option<String>,
    pub ttl_seconds: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub renewable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub replica: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub integrations: Vec<String>,
    pub cidrs: Option<Vec<String>>,
    pub actor: Option<Actor>,
    pub region: Option<Region>,
    #[serde(deserialize_with = "null_as_default")]
    pub database_branch: PasswordBranch,
}

/// Branch a password grants access to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordBranch {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub mysql_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mysql_edge_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub production: bool,
}

/// Password creation body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePasswordRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<f64>,
}

/// Password rename body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub name: String,
}

/// Password renewal body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenewPasswordRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_region_id: Option<String>,
}
