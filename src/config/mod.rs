//! config
//!
//! Client configuration loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. Environment (`MATTERMOST_URL`, `MATTERMOST_TOKEN`)
//! 4. CLI flags ([`Config::apply_overrides`])
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. `$MATTERMOST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/mattermost/config.toml`
//! 3. `~/.mattermost/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use mattermost_client::config::Config;
//!
//! let result = Config::load().unwrap();
//! for warning in &result.warnings {
//!     eprintln!("warning: {}", warning.message);
//! }
//! println!("Server: {}", result.config.url());
//! ```

pub mod schema;

pub use schema::ClientConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Server URL used when nothing is configured.
pub const DEFAULT_URL: &str = "http://localhost:8065";

/// Request timeout used when nothing is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MATTERMOST_CONFIG";

/// Environment variable overriding the server URL.
pub const URL_ENV: &str = "MATTERMOST_URL";

/// Environment variable overriding the token.
pub const TOKEN_ENV: &str = "MATTERMOST_TOKEN";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Merged values
    values: ClientConfig,
    /// Path to the config file (if loaded)
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from explicit values.
    pub fn new(values: ClientConfig) -> Self {
        Self {
            values,
            loaded_from: None,
        }
    }

    /// Load configuration from the default locations and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// the merged values are invalid. A missing file is not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let mut result = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => ConfigLoadResult {
                config: Config::default(),
                warnings: Vec::new(),
            },
        };

        result.config.apply_env(|key| std::env::var(key).ok());
        result.config.values.validate()?;
        Ok(result)
    }

    /// Load configuration from one file, without consulting the environment.
    pub fn load_from(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let values: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        values.validate()?;

        let mut warnings = Vec::new();
        if values.token.is_some() && is_readable_by_others(path) {
            warnings.push(ConfigWarning {
                message: format!(
                    "config file contains a token but is readable by other users; run 'chmod 600 {}'",
                    path.display()
                ),
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(ConfigLoadResult {
            config: Config {
                values,
                loaded_from: Some(path.to_path_buf()),
            },
            warnings,
        })
    }

    /// Find the first existing config file.
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $MATTERMOST_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/mattermost/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("mattermost/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.mattermost/config.toml
        let path = dirs::home_dir()?.join(".mattermost/config.toml");
        path.exists().then_some(path)
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Empty variables are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        self.values.merge(ClientConfig {
            url: non_empty(URL_ENV),
            token: non_empty(TOKEN_ENV),
            ..Default::default()
        });
    }

    /// Apply CLI overrides and re-validate.
    pub fn apply_overrides(&mut self, overrides: ClientConfig) -> Result<(), ConfigError> {
        self.values.merge(overrides);
        self.values.validate()
    }

    /// Get the canonical config path, `~/.mattermost/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".mattermost/config.toml"))
    }

    /// Write config to the canonical path.
    pub fn write(values: &ClientConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        Self::write_to(&path, values)?;
        Ok(path)
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed, writes a temp file in the same
    /// directory, then renames it over the target. The file is private to
    /// the owner on Unix.
    pub fn write_to(path: &Path, values: &ClientConfig) -> Result<(), ConfigError> {
        values.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(values).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        restrict_permissions(&file).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the server URL without trailing slash.
    ///
    /// Defaults to `http://localhost:8065`.
    pub fn url(&self) -> &str {
        self.values
            .url
            .as_deref()
            .unwrap_or(DEFAULT_URL)
            .trim_end_matches('/')
    }

    pub fn token(&self) -> Option<&str> {
        self.values.token.as_deref()
    }

    pub fn login_id(&self) -> Option<&str> {
        self.values.login_id.as_deref()
    }

    /// Get the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.values.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Get the User-Agent header value.
    pub fn user_agent(&self) -> &str {
        self.values
            .user_agent
            .as_deref()
            .unwrap_or(crate::client::DEFAULT_USER_AGENT)
    }

    /// The merged values.
    pub fn values(&self) -> &ClientConfig {
        &self.values
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

#[cfg(unix)]
fn is_readable_by_others(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o077 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_readable_by_others(_path: &Path) -> bool {
    false
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
