//! me command - Show the logged-in user

use super::block_on;
use crate::cli::{print_json, Context};
use anyhow::{Context as _, Result};

/// Print the current user as JSON.
pub fn me(ctx: &Context) -> Result<()> {
    let client = ctx.authenticated_client()?;
    let user = block_on(async { client.get_me().await?.read_entity() })?
        .context("Failed to fetch current user")?;
    print_json(&user)
}
