use crate::{
    apis::{
        BackupApi, BranchApi, DatabaseApi, DeployRequestApi, OauthApplicationApi,
        OrganizationApi, PasswordApi, UserApi,
    },
    auth::{self, Authentication},
    error::{PsError, PsResult},
    query::QueryParams,
    response::OperationResponse,
    transport::{AuthenticatedTransport, Transport, TransportOptions},
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE},
    Method, Request,
};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Production API root, including the version prefix
pub const DEFAULT_BASE_URL: &str = "https://api.planetscale.com/v1/";

pub const API_URL_ENV: &str = "PLANETSCALE_API_URL";

/// Main PlanetScale client
///
/// Cheap to clone; every clone shares the same transport.
#[derive(Clone)]
pub struct PlanetScaleClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for PlanetScaleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanetScaleClient")
            .field("base_url", &self.base_url.as_str())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl PlanetScaleClient {
    /// Create a client for the production API with the default reqwest
    /// transport
    pub fn new(auth: impl Authentication + 'static) -> PsResult<Self> {
        Self::with_transport(AuthenticatedTransport::new(auth)?, None)
    }

    /// Create a client over any transport.
    ///
    /// `base_url` defaults to [`DEFAULT_BASE_URL`]. A trailing `/` is added
    /// to its path when missing so operation paths resolve underneath it.
    pub fn with_transport(
        transport: impl Transport + 'static,
        base_url: Option<&str>,
    ) -> PsResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            transport: Arc::new(transport),
            cancel: None,
        })
    }

    /// Create a client from `PLANETSCALE_*` environment variables.
    ///
    /// Credentials come from `PLANETSCALE_SERVICE_TOKEN_ID` and
    /// `PLANETSCALE_SERVICE_TOKEN`, or `PLANETSCALE_ACCESS_TOKEN`.
    /// `PLANETSCALE_API_URL` overrides the base URL.
    pub fn from_env() -> PsResult<Self> {
        Self::from_env_with_options(&TransportOptions::default())
    }

    pub fn from_env_with_options(options: &TransportOptions) -> PsResult<Self> {
        let auth: Arc<dyn Authentication> = Arc::from(auth::auth_from_env()?);
        let transport = AuthenticatedTransport::with_client(options.build_client()?, auth);
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self::with_transport(transport, base_url.as_deref())
    }

    /// A handle whose operations abort once `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            cancel: Some(token),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get Organization API
    pub fn organizations(&self) -> OrganizationApi<'_> {
        OrganizationApi::new(self)
    }

    /// Get Database API
    pub fn databases(&self) -> DatabaseApi<'_> {
        DatabaseApi::new(self)
    }

    /// Get Branch API
    pub fn branches(&self) -> BranchApi<'_> {
        BranchApi::new(self)
    }

    /// Get Backup API
    pub fn backups(&self) -> BackupApi<'_> {
        BackupApi::new(self)
    }

    /// Get Password API
    pub fn passwords(&self) -> PasswordApi<'_> {
        PasswordApi::new(self)
    }

    /// Get Deploy Request API
    pub fn deploy_requests(&self) -> DeployRequestApi<'_> {
        DeployRequestApi::new(self)
    }

    /// Get OAuth Application API
    pub fn oauth_applications(&self) -> OauthApplicationApi<'_> {
        OauthApplicationApi::new(self)
    }

    /// Get User API
    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Build a body-less request for a path relative to the base URL.
    ///
    /// Path segments are inserted verbatim; callers pass URL-safe
    /// identifiers.
    pub fn request(&self, method: Method, path: &str, query: &QueryParams) -> PsResult<Request> {
        let mut url = self.base_url.join(path)?;
        query.apply(&mut url);
        debug!("HTTP {} {}", method, url);

        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(request)
    }

    /// Build a request carrying `body` as JSON
    pub fn request_with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> PsResult<Request> {
        let mut request = self.request(method, path, query)?;
        let bytes = serde_json::to_vec(body).map_err(PsError::Encode)?;
        debug!("Request body: {} bytes", bytes.len());

        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(bytes.into());
        Ok(request)
    }

    /// Send `request` once and map the response onto the operation's
    /// documented statuses.
    ///
    /// The body is always read to the end before decoding. A cancelled token
    /// yields [`PsError::Cancelled`] and nothing is decoded.
    pub async fn dispatch<R: OperationResponse>(&self, request: Request) -> PsResult<R> {
        let method = request.method().clone();
        let url = request.url().clone();

        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                warn!("{} {} cancelled before send", method, url);
                return Err(PsError::Cancelled);
            }
        }

        let exchange = async {
            let response = self.transport.send(request).await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, PsError>((status, body))
        };

        let (status, body) = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    warn!("{} {} cancelled in flight", method, url);
                    return Err(PsError::Cancelled);
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };
        debug!("HTTP {} {} -> {} ({} bytes)", method, url, status, body.len());

        let decoded = R::from_response(status, &body);
        if let Err(PsError::UnexpectedStatus { status, .. }) = &decoded {
            warn!("{} {} returned undocumented status {}", method, url, status);
        }
        decoded
    }

    /// Build, send and decode a body-less operation
    pub(crate) async fn call<R: OperationResponse>(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
    ) -> PsResult<R> {
        let request = self.request(method, path, &query)?;
        self.dispatch(request).await
    }

    /// Build, send and decode an operation with a JSON body
    pub(crate) async fn call_with_body<R, B>(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
        body: &B,
    ) -> PsResult<R>
    where
        R: OperationResponse,
        B: Serialize + ?Sized,
    {
        let request = self.request_with_body(method, path, &query, body)?;
        self.dispatch(request).await
    }
}

fn normalize_base_url(base_url: Option<&str>) -> PsResult<Url> {
    let mut url = Url::parse(base_url.unwrap_or(DEFAULT_BASE_URL))?;
    if url.cannot_be_a_base() {
        return Err(PsError::config_error(format!(
            "base URL {} cannot carry a path",
            url
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
