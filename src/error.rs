use thiserror::Error;

/// PlanetScale client error types
///
/// Documented API errors (403, 404, 422, 500) are not represented here: they
/// come back as variants of the operation's response enum. This type only
/// carries failures where no typed response could be produced.
#[derive(Error, Debug)]
pub enum PsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request cancelled")]
    Cancelled,

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("request body serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to decode {status} response body: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for PlanetScale operations
pub type PsResult<T> = Result<T, PsError>;

impl PsError {
    /// Wrap an error raised by a caller-supplied transport
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }

    /// Create an authentication error
    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when the failure happened while exchanging the request, including
    /// cancellation.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_) | Self::Cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status observed by the server, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
