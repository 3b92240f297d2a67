//! channel command - Inspect and manage channels

use super::block_on;
use crate::cli::args::ChannelAction;
use crate::cli::{print_json, Context};
use crate::model::{Channel, ChannelType};
use anyhow::{bail, Context as _, Result};

/// Run a channel subcommand.
pub fn channel(ctx: &Context, action: ChannelAction) -> Result<()> {
    let client = ctx.authenticated_client()?;

    match action {
        ChannelAction::Get { id } => {
            let channel = block_on(async { client.get_channel(&id, None).await?.read_entity() })?
                .with_context(|| format!("Failed to fetch channel '{}'", id))?;
            print_json(&channel)
        }
        ChannelAction::ByName { team, name } => {
            let channel = block_on(async {
                client
                    .get_channel_by_name_for_team_name(&name, &team, None)
                    .await?
                    .read_entity()
            })?
            .with_context(|| format!("Failed to fetch channel '{}' in team '{}'", name, team))?;
            print_json(&channel)
        }
        ChannelAction::Members { id, page, per_page } => {
            if per_page == 0 {
                bail!("--per-page must be greater than zero");
            }
            let members = block_on(async {
                client
                    .get_channel_members(&id, page, per_page, None)
                    .await?
                    .read_entity()
            })?
            .with_context(|| format!("Failed to list members of channel '{}'", id))?;
            print_json(&members)
        }
        ChannelAction::Create {
            team_id,
            name,
            display_name,
            private,
        } => {
            let channel_type = if private {
                ChannelType::Private
            } else {
                ChannelType::Open
            };
            let draft = Channel::new(display_name, name, channel_type, team_id);
            let created = block_on(async { client.create_channel(&draft).await?.read_entity() })?
                .context("Failed to create channel")?;
            print_json(&created)
        }
        ChannelAction::Delete { id } => {
            let status = block_on(async { client.delete_channel(&id).await?.read_entity() })?
                .with_context(|| format!("Failed to delete channel '{}'", id))?;
            if !status.is_ok() {
                bail!("Server did not confirm deletion of channel '{}'", id);
            }
            if !ctx.quiet {
                println!("Deleted channel {}.", id);
            }
            Ok(())
        }
    }
}
