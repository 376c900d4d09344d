//! Status-code multiplexing for operation responses.
//!
//! Every operation owns an enum with one variant per documented status,
//! generated by [`operation_response!`]. The dispatcher drains the body and
//! hands `(status, bytes)` to [`OperationResponse::from_response`], which
//! either picks the variant or reports an undocumented status.

use crate::error::{PsError, PsResult};
use serde::de::DeserializeOwned;

const BODY_SNIPPET_LEN: usize = 512;

/// A per-operation response: one variant per documented status code
pub trait OperationResponse: Sized {
    /// Decode a drained response. Undocumented statuses are an error.
    fn from_response(status: u16, body: &[u8]) -> PsResult<Self>;

    /// Status code of the variant that was produced
    fn status(&self) -> u16;

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }
}

/// Decode a JSON body, treating an empty body (nothing but JSON whitespace)
/// as the zero value of `T`.
///
/// 204 responses and bodiless error responses both land here.
pub fn decode_body<T>(status: u16, body: &[u8]) -> PsResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|source| PsError::Decode { status, source })
}

/// Lossy, truncated rendering of a body for error messages
pub fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}

/// Declare an operation's response enum and its status mapping.
///
/// ```ignore
/// operation_response! {
///     pub enum GetUserResponse {
///         200 => Ok(CurrentUser),
///         404 => NotFound(ApiErrorBody),
///     }
/// }
/// ```
macro_rules! operation_response {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $status:literal => $variant:ident($payload:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($payload), )+
        }

        impl $crate::response::OperationResponse for $name {
            fn from_response(status: u16, body: &[u8]) -> $crate::error::PsResult<Self> {
                match status {
                    $( $status => $crate::response::decode_body(status, body).map(Self::$variant), )+
                    _ => Err($crate::error::PsError::UnexpectedStatus {
                        status,
                        body: $crate::response::body_snippet(body),
                    }),
                }
            }

            fn status(&self) -> u16 {
                match self {
                    $( Self::$variant(_) => $status, )+
                }
            }
        }
    };
}

pub(crate) use operation_response;
