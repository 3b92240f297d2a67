//! cli
//!
//! Command-line interface layer for the `mm` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Load configuration and apply flag overrides
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers build a [`MattermostClient`] from the
//! resolved [`Config`], call one or two endpoints, and print the decoded
//! entities as JSON.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::client::MattermostClient;
use crate::config::Config;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MATTERMOST_LOG";

/// Per-invocation state shared by command handlers.
#[derive(Debug)]
pub struct Context {
    /// Resolved configuration
    pub config: Config,
    /// Minimal output
    pub quiet: bool,
}

impl Context {
    /// Build a client from the resolved configuration.
    pub fn client(&self) -> Result<MattermostClient> {
        MattermostClient::from_config(&self.config).context("Failed to create HTTP client")
    }

    /// Build a client that must carry a token.
    pub fn authenticated_client(&self) -> Result<MattermostClient> {
        let client = self.client()?;
        if !client.has_token() {
            bail!("Not authenticated. Run 'mm login' or set MATTERMOST_TOKEN.");
        }
        Ok(client)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug, cli.quiet);

    let overrides = cli.overrides();
    let loaded = Config::load().context("Failed to load config")?;
    if !cli.quiet {
        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning.message);
        }
    }

    let mut config = loaded.config;
    config
        .apply_overrides(overrides)
        .context("Invalid command-line option")?;
    tracing::debug!(url = config.url(), has_token = config.token().is_some(), "config resolved");

    let ctx = Context {
        config,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `--debug` wins over `MATTERMOST_LOG`; otherwise the variable is used and
/// falls back to `warn` (`error` with `--quiet`).
pub fn init_logging(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        let fallback = if quiet { "error" } else { "warn" };
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}
