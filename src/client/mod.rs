//! client
//!
//! HTTP call layer for the Mattermost REST API v4.
//!
//! # Design
//!
//! [`MattermostClient`] issues requests with `reqwest` and wraps every
//! completed exchange in an [`ApiResponse`]. Endpoint methods are grouped by
//! resource (`users`, `teams`, `channels`, `posts`) in separate `impl`
//! blocks; they all funnel through the same request helpers here, which add:
//!
//! - `Authorization: Bearer <token>` when a session or access token is set
//! - `Accept` and `Content-Type` from [`ContentType::Json`]
//! - `User-Agent`
//! - `If-None-Match` for conditional GETs given an etag
//!
//! # Error model
//!
//! - Transport failures (connection refused, timeout) return `Err` directly.
//! - HTTP error statuses return `Ok(ApiResponse)` with `has_error() == true`;
//!   [`ApiResponse::read_entity`] maps them to [`ClientError`].
//!
//! There is no retry, cache, or rate-limit backoff.
//!
//! # Example
//!
//! ```ignore
//! use mattermost_client::client::MattermostClient;
//!
//! let client = MattermostClient::new("http://localhost:8065");
//! client.login("alice", "password").await?.read_entity()?;
//!
//! let channel = client.get_channel("channel-id", None).await?.read_entity()?;
//! println!("{} ({:?})", channel.display_name, channel.channel_type);
//! ```

mod channels;
mod error;
mod posts;
mod response;
mod routes;
mod teams;
mod users;

pub use error::ClientError;
pub use response::ApiResponse;

use std::sync::RwLock;

use reqwest::header::{ACCEPT, CONTENT_TYPE, IF_NONE_MATCH, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;

use crate::coded::CodedEnum;
use crate::config::Config;
use crate::model::ContentType;
use routes::Route;

/// Path prefix of the v4 API.
pub const API_URL_SUFFIX: &str = "/api/v4";

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("mattermost-client/", env!("CARGO_PKG_VERSION"));

/// Response header carrying the session token after login.
pub(crate) const TOKEN_HEADER: &str = "Token";

/// Client for one Mattermost server.
///
/// Cheap to share behind an `Arc`; the token is guarded by a lock so one
/// client can serve concurrent tasks.
pub struct MattermostClient {
    /// HTTP client for making requests
    http: Client,
    /// Server base URL without trailing slash
    url: String,
    /// User-Agent header value
    user_agent: String,
    /// Session or personal access token
    token: RwLock<Option<String>>,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for MattermostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MattermostClient")
            .field("url", &self.url)
            .field("user_agent", &self.user_agent)
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl MattermostClient {
    /// Create a client for the server at `url` (e.g. `http://localhost:8065`).
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_http_client(url, Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(url: impl Into<String>, http: Client) -> Self {
        let url = url.into();
        Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: RwLock::new(None),
        }
    }

    /// Create a client from loaded configuration.
    ///
    /// Applies the configured timeout, User-Agent and token.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let client = Self::with_http_client(config.url(), http).with_user_agent(config.user_agent());
        if let Some(token) = config.token() {
            client.set_access_token(token);
        }
        Ok(client)
    }

    /// Override the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the server base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Full URL for a route. Each route segment is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base URL does not parse or a
    /// segment is empty, `.` or `..`.
    pub(crate) fn api_url(&self, route: &Route) -> Result<Url, ClientError> {
        route.validate()?;
        let mut url = Url::parse(&format!("{}{}", self.url, API_URL_SUFFIX))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{}: not a base URL", self.url)))?
            .extend(route.segments());
        Ok(url)
    }

    /// Use a personal access token (or a saved session token).
    pub fn set_access_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    /// Forget the current token.
    pub fn clear_access_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.read().map(|t| t.is_some()).unwrap_or(false)
    }

    /// Current token, for persisting a session.
    pub fn access_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    /// Start a request with the common headers.
    fn request(&self, method: Method, route: &Route) -> Result<RequestBuilder, ClientError> {
        let mut builder = self
            .http
            .request(method, self.api_url(route)?)
            .header(ACCEPT, ContentType::Json.code())
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(token) = self.access_token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Attach a JSON body.
    fn with_json<B: Serialize + ?Sized>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<RequestBuilder, ClientError> {
        let bytes = serde_json::to_vec(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        Ok(builder
            .header(CONTENT_TYPE, ContentType::Json.code())
            .body(bytes))
    }

    /// Send a request and read the whole response.
    async fn send<T>(&self, builder: RequestBuilder) -> Result<ApiResponse<T>, ClientError> {
        let request = builder
            .build()
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::debug!(%method, %path, error = %e, "request failed");
            ClientError::Network(e.to_string())
        })?;

        tracing::debug!(
            %method,
            %path,
            status = response.status().as_u16(),
            "request completed"
        );
        ApiResponse::from_response(response).await
    }

    pub(crate) async fn get<T>(
        &self,
        route: Route,
        etag: Option<&str>,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.get_with_query(route, &[] as &[(&str, &str)], etag)
            .await
    }

    pub(crate) async fn get_with_query<T, Q: Serialize + ?Sized>(
        &self,
        route: Route,
        query: &Q,
        etag: Option<&str>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut builder = self.request(Method::GET, &route)?.query(query);
        if let Some(etag) = etag {
            builder = builder.header(IF_NONE_MATCH, etag);
        }
        self.send(builder).await
    }

    pub(crate) async fn post<T, B: Serialize + ?Sized>(
        &self,
        route: Route,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        let builder = Self::with_json(self.request(Method::POST, &route)?, body)?;
        self.send(builder).await
    }

    /// POST without a body.
    pub(crate) async fn post_empty<T>(&self, route: Route) -> Result<ApiResponse<T>, ClientError> {
        self.send(self.request(Method::POST, &route)?).await
    }

    pub(crate) async fn put<T, B: Serialize + ?Sized>(
        &self,
        route: Route,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        let builder = Self::with_json(self.request(Method::PUT, &route)?, body)?;
        self.send(builder).await
    }

    pub(crate) async fn delete<T>(&self, route: Route) -> Result<ApiResponse<T>, ClientError> {
        self.send(self.request(Method::DELETE, &route)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = MattermostClient::new("http://localhost:8065/");
        assert_eq!(client.url(), "http://localhost:8065");
        assert!(!client.has_token());
    }

    #[test]
    fn api_url_format() {
        let client = MattermostClient::new("https://chat.example.com");
        assert_eq!(
            client.api_url(&routes::channel("abc")).unwrap().as_str(),
            "https://chat.example.com/api/v4/channels/abc"
        );
    }

    #[test]
    fn api_url_encodes_segments() {
        let client = MattermostClient::new("https://chat.example.com/");
        let url = client
            .api_url(&routes::user_by_username("a/b?c#d"))
            .unwrap();
        assert_eq!(url.path(), "/api/v4/users/username/a%2Fb%3Fc%23d");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn api_url_keeps_base_path() {
        let client = MattermostClient::new("https://example.com/chat");
        assert_eq!(
            client.api_url(&routes::users()).unwrap().as_str(),
            "https://example.com/chat/api/v4/users"
        );
    }

    #[test]
    fn api_url_rejects_dot_segments() {
        let client = MattermostClient::new("https://chat.example.com");
        assert!(matches!(
            client.api_url(&routes::user_by_username("..")),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn token_lifecycle() {
        let client = MattermostClient::new("http://localhost:8065");
        client.set_access_token("tok");
        assert!(client.has_token());
        assert_eq!(client.access_token().as_deref(), Some("tok"));
        client.clear_access_token();
        assert!(!client.has_token());
        assert!(client.access_token().is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let client = MattermostClient::new("http://localhost:8065");
        client.set_access_token("secret_token_abc123");
        let debug_output = format!("{:?}", client);
        assert!(!debug_output.contains("secret_token_abc123"));
        assert!(debug_output.contains("has_token"));
    }

    #[test]
    fn request_carries_common_headers() {
        let client = MattermostClient::new("http://localhost:8065").with_user_agent("test-agent");
        client.set_access_token("tok");
        let request = client.request(Method::GET, &routes::user("me")).unwrap().build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:8065/api/v4/users/me");
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[USER_AGENT], "test-agent");
        assert_eq!(request.headers()[reqwest::header::AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn request_without_token_has_no_authorization() {
        let client = MattermostClient::new("http://localhost:8065");
        let request = client.request(Method::GET, &routes::user("me")).unwrap().build().unwrap();
        assert!(request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());
    }

    #[test]
    fn json_body_sets_content_type() {
        let client = MattermostClient::new("http://localhost:8065");
        let builder = MattermostClient::with_json(
            client
                .request(Method::POST, &routes::channels().join("direct"))
                .unwrap(),
            &["u1", "u2"],
        )
        .unwrap();
        let request = builder.build().unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"["u1","u2"]"#);
    }

    #[tokio::test]
    async fn invalid_url_is_reported() {
        let client = MattermostClient::new("not a url");
        let err = client
            .get::<crate::model::User>(routes::user("me"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
