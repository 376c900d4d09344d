use crate::error::{PsError, PsResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

pub const SERVICE_TOKEN_ID_ENV: &str = "PLANETSCALE_SERVICE_TOKEN_ID";
pub const SERVICE_TOKEN_ENV: &str = "PLANETSCALE_SERVICE_TOKEN";
pub const ACCESS_TOKEN_ENV: &str = "PLANETSCALE_ACCESS_TOKEN";

/// Authentication trait for the PlanetScale API
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers
    async fn apply_auth(&self, headers: &mut HeaderMap) -> PsResult<()>;
}

fn sensitive_header(value: String) -> PsResult<HeaderValue> {
    let mut header = HeaderValue::from_str(&value)
        .map_err(|e| PsError::auth_error(format!("Invalid auth header: {}", e)))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Service token authentication, sent as `Authorization: <id>:<token>`
#[derive(Clone)]
pub struct ServiceTokenAuth {
    id: String,
    token: String,
}

impl ServiceTokenAuth {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for ServiceTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceTokenAuth")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait::async_trait]
impl Authentication for ServiceTokenAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> PsResult<()> {
        let value = sensitive_header(format!("{}:{}", self.id, self.token))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// OAuth access token authentication
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> PsResult<()> {
        let value = sensitive_header(format!("Bearer {}", self.token))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn apply_auth(&self, _headers: &mut HeaderMap) -> PsResult<()> {
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Pick credentials from the environment.
///
/// A service token pair wins over an access token when both are set.
pub fn auth_from_env() -> PsResult<Box<dyn Authentication>> {
    match (
        non_empty_var(SERVICE_TOKEN_ID_ENV),
        non_empty_var(SERVICE_TOKEN_ENV),
    ) {
        (Some(id), Some(token)) => return Ok(Box::new(ServiceTokenAuth::new(id, token))),
        (Some(_), None) => {
            return Err(PsError::config_error(format!(
                "{} is set but {} is missing",
                SERVICE_TOKEN_ID_ENV, SERVICE_TOKEN_ENV
            )))
        }
        (None, Some(_)) => {
            return Err(PsError::config_error(format!(
                "{} is set but {} is missing",
                SERVICE_TOKEN_ENV, SERVICE_TOKEN_ID_ENV
            )))
        }
        (None, None) => {}
    }

    non_empty_var(ACCESS_TOKEN_ENV)
        .map(|token| Box::new(BearerAuth::new(token)) as Box<dyn Authentication>)
        .ok_or_else(|| {
            PsError::config_error(format!(
                "missing credentials: set {} and {}, or {}",
                SERVICE_TOKEN_ID_ENV, SERVICE_TOKEN_ENV, ACCESS_TOKEN_ENV
            ))
        })
}
