//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--url <url>`: Server URL, overriding config and `MATTERMOST_URL`
//! - `--token <token>`: Access token, overriding config and `MATTERMOST_TOKEN`
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;

/// mm - Command-line client for the Mattermost REST API
#[derive(Parser, Debug)]
#[command(name = "mm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server URL (e.g. http://localhost:8065)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Personal access token or session token
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Config values given as flags.
    pub fn overrides(&self) -> ClientConfig {
        ClientConfig {
            url: self.url.clone(),
            token: self.token.clone(),
            ..Default::default()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with username or email and password
    #[command(
        long_about = "Log in with a username or email and a password.\n\n\
            The password is always read from the terminal without echo. The \
            session token is printed only with --print-token; save it in the \
            config file or MATTERMOST_TOKEN to reuse the session.",
        after_help = "\
EXAMPLES:
    mm login --login-id alice
    MATTERMOST_TOKEN=$(mm login --login-id alice --print-token) mm me"
    )]
    Login {
        /// Username or email (defaults to login_id from config)
        #[arg(long, value_name = "ID")]
        login_id: Option<String>,

        /// Print the session token to stdout
        #[arg(long)]
        print_token: bool,
    },

    /// Show the logged-in user
    Me,

    /// Channel operations
    Channel {
        #[command(subcommand)]
        action: ChannelAction,
    },

    /// Post operations
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(after_help = "\
SETUP:
    # Bash
    mm completion bash > /etc/bash_completion.d/mm

    # Zsh
    mm completion zsh > \"${fpath[1]}/_mm\"

    # Fish
    mm completion fish > ~/.config/fish/completions/mm.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ChannelAction {
    /// Show a channel by id
    Get {
        /// Channel id
        id: String,
    },
    /// Show a channel by team name and channel name
    ByName {
        /// Team name
        team: String,
        /// Channel name
        name: String,
    },
    /// List channel members
    Members {
        /// Channel id
        id: String,
        /// Page number, from 0
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Members per page
        #[arg(long, default_value_t = 60)]
        per_page: u32,
    },
    /// Create a public or private channel
    Create {
        /// Team id
        team_id: String,
        /// Channel handle (lowercase, no spaces)
        name: String,
        /// Display name
        display_name: String,
        /// Create a private channel
        #[arg(long)]
        private: bool,
    },
    /// Archive a channel
    Delete {
        /// Channel id
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PostAction {
    /// Post a message to a channel
    Create {
        /// Channel id
        channel_id: String,
        /// Message text
        message: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write a config file at ~/.mattermost/config.toml
    Init {
        /// Server URL to store
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mm",
            "channel",
            "get",
            "abc",
            "--url",
            "http://chat.example.com",
            "--token",
            "tok",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.url.as_deref(), Some("http://chat.example.com"));
        assert_eq!(overrides.token.as_deref(), Some("tok"));
        assert!(matches!(
            cli.command,
            Command::Channel {
                action: ChannelAction::Get { .. }
            }
        ));
    }

    #[test]
    fn members_paging_defaults() {
        let cli = Cli::try_parse_from(["mm", "channel", "members", "abc"]).unwrap();
        match cli.command {
            Command::Channel {
                action: ChannelAction::Members { page, per_page, .. },
            } => {
                assert_eq!(page, 0);
                assert_eq!(per_page, 60);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn by_name_uses_kebab_case() {
        assert!(Cli::try_parse_from(["mm", "channel", "by-name", "team", "town-square"]).is_ok());
    }
}
