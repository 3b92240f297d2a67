//! client::error
//!
//! Error type for client operations.

use thiserror::Error;

use crate::model::AppError;

/// Errors from client operations.
///
/// Transport failures surface directly from the call. HTTP status failures
/// are carried in [`ApiResponse`](super::ApiResponse) and only become a
/// `ClientError` when the caller reads the entity.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The operation needs a session or access token and none is set.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (bad credentials, expired session, missing permission).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// The server answered with an error status.
    #[error("API error: {status} - {error}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the server (synthesized if the body was not JSON)
        error: AppError,
    },

    /// The server answered 304 to a conditional request.
    #[error("not modified")]
    NotModified,

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The server URL or a request path is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound(_) => Some(404),
            ClientError::RateLimited => Some(429),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotModified => Some(304),
            _ => None,
        }
    }

    /// The server's error id, when the server sent one.
    pub fn app_error_id(&self) -> Option<&str> {
        match self {
            ClientError::Api { error, .. } if !error.id.is_empty() => Some(&error.id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_display() {
        assert_eq!(
            format!("{}", ClientError::AuthRequired),
            "authentication required"
        );
        assert_eq!(
            format!("{}", ClientError::AuthFailed("expired session".into())),
            "authentication failed: expired session"
        );
        assert_eq!(
            format!("{}", ClientError::NotFound("channel".into())),
            "not found: channel"
        );
        assert_eq!(format!("{}", ClientError::RateLimited), "rate limited");
        assert_eq!(
            format!(
                "{}",
                ClientError::Api {
                    status: 400,
                    error: AppError {
                        id: "api.context.invalid_param.app_error".into(),
                        message: "Invalid user_id parameter".into(),
                        ..Default::default()
                    }
                }
            ),
            "API error: 400 - Invalid user_id parameter (api.context.invalid_param.app_error)"
        );
        assert_eq!(
            format!("{}", ClientError::Network("connection refused".into())),
            "network error: connection refused"
        );
        assert_eq!(
            format!("{}", ClientError::Decode("expected value".into())),
            "failed to decode response: expected value"
        );
    }

    #[test]
    fn status_and_app_error_id() {
        let err = ClientError::Api {
            status: 400,
            error: AppError {
                id: "bad".into(),
                ..Default::default()
            },
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.app_error_id(), Some("bad"));
        assert_eq!(ClientError::NotFound("x".into()).status(), Some(404));
        assert_eq!(ClientError::Network("x".into()).status(), None);
        assert_eq!(ClientError::RateLimited.app_error_id(), None);
    }
}
