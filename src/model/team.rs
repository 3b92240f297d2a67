use serde::{Deserialize, Serialize};

use super::user::Role;
use crate::coded::{self, coded_enum};

coded_enum! {
    /// Who may join a team.
    pub enum TeamType {
        /// Anyone on the server
        Open => "O",
        /// Invitation only
        Invite => "I",
    }
}

/// A team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
    pub display_name: String,
    pub name: String,
    pub description: String,
    pub email: String,
    #[serde(
        rename = "type",
        with = "coded::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_type: Option<TeamType>,
    pub company_name: String,
    pub allowed_domains: String,
    pub invite_id: String,
    pub allow_open_invite: bool,
}

impl Team {
    pub fn new(
        display_name: impl Into<String>,
        name: impl Into<String>,
        team_type: TeamType,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            team_type: Some(team_type),
            ..Default::default()
        }
    }
}

/// A user's membership in a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub team_id: String,
    pub user_id: String,
    #[serde(with = "coded::space_separated")]
    pub roles: Vec<Role>,
    pub delete_at: i64,
}

impl TeamMember {
    pub fn new(team_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}
