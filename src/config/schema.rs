//! config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing: the server URL must be http(s) and
//! the timeout must be positive.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Client configuration file.
///
/// # Example
///
/// ```toml
/// url = "https://chat.example.com"
/// login_id = "alice"
/// timeout_secs = 30
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Server base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Personal access token or saved session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Default username or email for `login`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_id: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("has_token", &self.token.is_some())
            .field("login_id", &self.login_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.url {
            validate_url(url)?;
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".into(),
            ));
        }

        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(ConfigError::InvalidValue("token cannot be empty".into()));
            }
        }

        Ok(())
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: ClientConfig) {
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.login_id.is_some() {
            self.login_id = other.login_id;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
    }
}

/// Check that a server URL is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid url '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::InvalidValue(format!(
                "invalid url '{}': scheme must be http or https, not '{}'",
                url, other
            )))
        }
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue(format!(
            "invalid url '{}': missing host",
            url
        )));
    }

    Ok(())
}
