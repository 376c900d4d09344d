//! The request/response exchange behind every operation.
//!
//! The client builds a complete [`reqwest::Request`] and hands it to a
//! [`Transport`] exactly once. Anything that decorates the exchange
//! (credentials, retries, rate limiting, request dumps) belongs in a
//! transport implementation, never in the operations themselves.

use crate::{
    auth::Authentication,
    error::PsResult,
};
use reqwest::{Client, Request, Response};
use std::{sync::Arc, time::Duration};

/// Performs one HTTP exchange.
///
/// Implementations must be safe to share between tasks; the client calls
/// `send` concurrently from every clone of the handle.
///
/// A transport that answers without touching the network (a replay cache, a
/// test double) can build its reply from an `http::Response`, which reqwest
/// converts with `From`:
///
/// ```ignore
/// let canned = http::Response::builder()
///     .status(404)
///     .body(r#"{"code":"not_found","message":"Not Found"}"#)
///     .map_err(PsError::transport)?;
/// Ok(reqwest::Response::from(canned))
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> PsResult<Response>;
}

#[async_trait::async_trait]
impl Transport for Client {
    async fn send(&self, request: Request) -> PsResult<Response> {
        Ok(self.execute(request).await?)
    }
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> PsResult<Response> {
        (**self).send(request).await
    }
}

/// Tuning for the default reqwest transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    /// Whole-request timeout in milliseconds. `None` leaves it to the caller.
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl TransportOptions {
    pub fn build_client(&self) -> PsResult<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());
        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(builder.build()?)
    }
}

/// reqwest transport that stamps credentials onto every request
#[derive(Clone)]
pub struct AuthenticatedTransport {
    client: Client,
    auth: Arc<dyn Authentication>,
}

impl AuthenticatedTransport {
    pub fn new(auth: impl Authentication + 'static) -> PsResult<Self> {
        Self::with_options(auth, &TransportOptions::default())
    }

    pub fn with_options(
        auth: impl Authentication + 'static,
        options: &TransportOptions,
    ) -> PsResult<Self> {
        Ok(Self::with_client(options.build_client()?, Arc::new(auth)))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client, auth: Arc<dyn Authentication>) -> Self {
        Self { client, auth }
    }
}

impl std::fmt::Debug for AuthenticatedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedTransport").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Transport for AuthenticatedTransport {
    async fn send(&self, mut request: Request) -> PsResult<Response> {
        self.auth.apply_auth(request.headers_mut()).await?;
        Ok(self.client.execute(request).await?)
    }
}
