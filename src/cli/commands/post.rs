//! post command - Post messages

use super::block_on;
use crate::cli::args::PostAction;
use crate::cli::{print_json, Context};
use crate::model::Post;
use anyhow::{Context as _, Result};

/// Run a post subcommand.
pub fn post(ctx: &Context, action: PostAction) -> Result<()> {
    let client = ctx.authenticated_client()?;

    match action {
        PostAction::Create {
            channel_id,
            message,
        } => {
            let draft = Post::new(channel_id, message);
            let created = block_on(async { client.create_post(&draft).await?.read_entity() })?
                .context("Failed to create post")?;
            print_json(&created)
        }
    }
}
