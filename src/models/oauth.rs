use super::common::null_as_default;
use serde::{Deserialize, Serialize};

/// OAuth application registered by an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthApplication {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub redirect_uri: String,
    pub avatar: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tokens: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Token issued through an OAuth application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthToken {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_used_at: String,
    pub oauth_accesses_by_resource: Option<OauthAccessesByResource>,
}

/// Accesses granted to a token, grouped by resource kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthAccessesByResource {
    #[serde(deserialize_with = "null_as_default")]
    pub branch: OauthResourceAccesses,
    #[serde(deserialize_with = "null_as_default")]
    pub database: OauthResourceAccesses,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: OauthResourceAccesses,
    #[serde(deserialize_with = "null_as_default")]
    pub user: OauthResourceAccesses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthResourceAccesses {
    #[serde(deserialize_with = "null_as_default")]
    pub accesses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<OauthResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthResource {
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

/// Token grant body.
///
/// `grant_type` is `authorization_code` (with `code` and `redirect_uri`) or
/// `refresh_token` (with `refresh_token`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrRenewOauthTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub grant_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Result of a successful token grant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OauthTokenGrant {
    #[serde(deserialize_with = "null_as_default")]
    pub token_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plain_text_refresh_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_token_accesses: Vec<String>,
    pub expires_at: Option<String>,
}
