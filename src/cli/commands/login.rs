//! cli::commands::login
//!
//! Password login.
//!
//! # Security
//!
//! The password is only ever read from the terminal with echo disabled.
//! The session token is printed only when `--print-token` is given.

use super::block_on;
use crate::cli::Context;
use anyhow::{bail, Context as _, Result};
use std::io::{self, Write};

/// Run the login command.
pub fn login(ctx: &Context, login_id: Option<&str>, print_token: bool) -> Result<()> {
    let login_id = match login_id.or(ctx.config.login_id()) {
        Some(id) => id.to_string(),
        None => bail!("Login id required. Use --login-id <ID> or set login_id in the config file."),
    };

    let password = read_password()?;
    let client = ctx.client()?;

    let user = block_on(async {
        client
            .login(&login_id, &password)
            .await?
            .read_entity()
    })?
    .context("Login failed")?;

    if print_token {
        let token = client
            .access_token()
            .ok_or_else(|| anyhow::anyhow!("Server returned no session token"))?;
        println!("{}", token);
    } else if !ctx.quiet {
        println!("Logged in as {}.", user.username);
    }

    Ok(())
}

/// Prompt for the password with masked input.
fn read_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;

    let password = rpassword::read_password().context("Failed to read password")?;

    if password.is_empty() {
        bail!("Password cannot be empty.");
    }

    Ok(password)
}
