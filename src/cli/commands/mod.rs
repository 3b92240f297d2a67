//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Async Commands
//!
//! Commands that talk to the server are async. Each one builds a
//! single-use tokio runtime and blocks on it, so the CLI stays synchronous.

mod channel;
mod completion;
mod config_cmd;
mod login;
mod me;
mod post;

// Re-export command functions for testing and direct invocation
pub use channel::channel;
pub use completion::completion;
pub use config_cmd::{init as config_init, show as config_show};
pub use login::login;
pub use me::me;
pub use post::post;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Login {
            login_id,
            print_token,
        } => login::login(ctx, login_id.as_deref(), print_token),
        Command::Me => me::me(ctx),
        Command::Channel { action } => channel::channel(ctx, action),
        Command::Post { action } => post::post(ctx, action),
        Command::Config { action } => match action {
            ConfigAction::Init { url, force } => config_cmd::init(ctx, url.as_deref(), force),
            ConfigAction::Show => config_cmd::show(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Run a future to completion on a fresh runtime.
pub(crate) fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new()?;
    Ok(rt.block_on(future))
}
