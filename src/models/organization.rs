use super::common::{null_as_default, Patch};
use serde::{Deserialize, Serialize};

/// Organization information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plan: String,
    pub billing_email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_only_production_access: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_create_databases: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sleeping_database_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_databases_remaining: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_past_due_invoices: bool,
    pub has_card: Option<bool>,
    pub idp_managed_roles: Option<bool>,
    pub require_admin_for_production_access: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub single_tenancy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sso: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sso_directory: bool,
    pub sso_portal_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_billing_info: bool,
    pub features: Option<OrganizationFeatures>,
    pub flags: Option<OrganizationFlags>,
}

/// Feature toggles enabled for an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationFeatures {
    pub insights: Option<bool>,
    pub single_tenancy: Option<bool>,
    pub sso: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationFlags {
    pub example_flag: Option<String>,
}

/// Organization update body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrganizationRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub billing_email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub idp_managed_roles: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub require_admin_for_production_access: Patch<bool>,
}
