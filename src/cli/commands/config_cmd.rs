//! config command - Create or show the client config file

use crate::cli::{print_json, Context};
use crate::config::{ClientConfig, Config};
use anyhow::{bail, Context as _, Result};

/// Write a fresh config file at the canonical path.
///
/// Stores `--url` (or the currently resolved URL) and the login id, never
/// the token.
pub fn init(ctx: &Context, url: Option<&str>, force: bool) -> Result<()> {
    let path = Config::default_path().context("Failed to locate config path")?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let values = ClientConfig {
        url: Some(url.unwrap_or(ctx.config.url()).to_string()),
        login_id: ctx.config.login_id().map(str::to_string),
        ..Default::default()
    };
    Config::write_to(&path, &values).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Show the effective configuration with the token redacted.
pub fn show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;
    let view = serde_json::json!({
        "config_file": config.loaded_from().map(|p| p.display().to_string()),
        "url": config.url(),
        "token": config.token().map(|_| "<set>"),
        "login_id": config.login_id(),
        "timeout_secs": config.timeout().as_secs(),
        "user_agent": config.user_agent(),
    });
    print_json(&view)
}
