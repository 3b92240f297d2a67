//! mattermost-client - Typed client for the Mattermost REST API v4
//!
//! The crate maps Mattermost's wire resources (channels, users, teams,
//! posts) to Rust types and talks to a server over HTTP. Most enumerated
//! fields travel as short string codes (`"O"`, `"channel_admin"`,
//! `"application/json"`); [`coded`] turns those into closed Rust enums.
//!
//! # Architecture
//!
//! - [`coded`] - Code-to-enum resolution and serde codecs
//! - [`model`] - Wire resources and their enumerations
//! - [`client`] - HTTP calls, response wrapping and error mapping
//! - [`config`] - Config file, environment and flag resolution
//! - [`cli`] - The `mm` command-line front end
//!
//! # Decoding policy
//!
//! Enumerated fields inside resources decode leniently: a code the client
//! does not know becomes `None` and is logged, so a newer server cannot
//! break decoding of a whole channel or user. A value of the wrong JSON
//! type (an object or number where a code string belongs) is always an
//! error. Decoding an enum on its own (`"O".parse::<ChannelType>()`) is
//! strict.

pub mod cli;
pub mod client;
pub mod coded;
pub mod config;
pub mod model;
