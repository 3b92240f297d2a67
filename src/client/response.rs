//! client::response
//!
//! Raw response wrapper with typed entity access.

use std::marker::PhantomData;

use reqwest::header::{HeaderMap, CONTENT_TYPE, ETAG};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::ClientError;
use crate::model::{AppError, ContentType};

/// Header carrying the server's request id.
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// A completed HTTP exchange whose body decodes to `T`.
///
/// The status is not interpreted until [`read_entity`](Self::read_entity)
/// is called, so callers can inspect error statuses directly.
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    entity: PhantomData<fn() -> T>,
}

// Custom Debug to avoid exposing the session token header
impl<T> std::fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .field("etag", &self.etag())
            .field("request_id", &self.request_id())
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl<T> ApiResponse<T> {
    /// Build a response from its parts.
    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            entity: PhantomData,
        }
    }

    /// Read a reqwest response fully.
    pub(crate) async fn from_response(response: Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self::from_parts(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the server answered with a client or server error.
    pub fn has_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    pub fn is_not_modified(&self) -> bool {
        self.status == StatusCode::NOT_MODIFIED
    }

    /// A response header as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|v| v.to_str().ok())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }

    /// The response media type, if it is one the client knows.
    pub fn content_type(&self) -> Option<ContentType> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(ContentType::from_header)
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode the server's error body, if it sent one.
    pub fn read_error(&self) -> Option<AppError> {
        let error: AppError = serde_json::from_str(&self.body).ok()?;
        if error.id.is_empty() && error.message.is_empty() {
            None
        } else {
            Some(error)
        }
    }

    /// Map an error status to a [`ClientError`].
    ///
    /// Returns `None` for non-error statuses.
    pub fn error(&self) -> Option<ClientError> {
        if !self.has_error() {
            return None;
        }

        let app_error = self.read_error();
        let message = app_error
            .as_ref()
            .map(|e| e.to_string())
            .or_else(|| self.status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        Some(match self.status {
            StatusCode::UNAUTHORIZED => ClientError::AuthFailed(message),
            StatusCode::FORBIDDEN => ClientError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited,
            status => ClientError::Api {
                status: status.as_u16(),
                error: app_error.unwrap_or_else(|| AppError {
                    message,
                    status_code: status.as_u16(),
                    ..Default::default()
                }),
            },
        })
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode the body as `T`.
    ///
    /// # Errors
    ///
    /// - The mapped status error if the server answered with an error status
    /// - `NotModified` for a 304 answer to a conditional request
    /// - `Decode` if the body is not a valid `T`
    pub fn read_entity(&self) -> Result<T, ClientError> {
        if let Some(err) = self.error() {
            return Err(err);
        }
        if self.is_not_modified() {
            return Err(ClientError::NotModified);
        }
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
