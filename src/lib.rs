/*
 * PlanetScale API client - Rust client for the PlanetScale control-plane API
 */

// Internal modules
mod client;
pub mod models;  // Make models public
pub mod apis;
mod error;
mod auth;
mod query;
mod response;
mod transport;

// Re-export public types and interfaces
pub use client::{PlanetScaleClient, API_URL_ENV, DEFAULT_BASE_URL};
pub use models::*;
pub use apis::*;
pub use error::{PsError, PsResult};
pub use auth::{
    Authentication, BearerAuth, NoAuth, ServiceTokenAuth, ACCESS_TOKEN_ENV, SERVICE_TOKEN_ENV,
    SERVICE_TOKEN_ID_ENV,
};
pub use query::QueryParams;
pub use response::OperationResponse;
pub use transport::{AuthenticatedTransport, Transport, TransportOptions};
pub use tokio_util::sync::CancellationToken;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        PlanetScaleClient,
        ServiceTokenAuth, BearerAuth, NoAuth,
        PsError, PsResult, OperationResponse, CancellationToken,
        // Common model types
        Organization, Database, Branch, Backup, Password, DeployRequest,
        ApiErrorBody, Page, Patch,
    };
}
