use serde::{Deserialize, Serialize};

use crate::coded::{self, coded_enum};

coded_enum! {
    /// Built-in permission roles.
    ///
    /// Role lists travel as one space-separated string, e.g.
    /// `"system_user system_admin"`.
    pub enum Role {
        SystemGuest => "system_guest",
        SystemUser => "system_user",
        SystemAdmin => "system_admin",
        SystemPostAll => "system_post_all",
        SystemPostAllPublic => "system_post_all_public",
        SystemUserAccessToken => "system_user_access_token",
        TeamUser => "team_user",
        TeamAdmin => "team_admin",
        TeamPostAll => "team_post_all",
        TeamPostAllPublic => "team_post_all_public",
        ChannelUser => "channel_user",
        ChannelAdmin => "channel_admin",
        ChannelGuest => "channel_guest",
    }
}

/// A user account.
///
/// `password` is only ever sent (on create) and never returned by the server.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub auth_service: String,
    pub email: String,
    pub email_verified: bool,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    #[serde(with = "coded::space_separated")]
    pub roles: Vec<Role>,
    pub locale: String,
}

// Custom Debug to avoid exposing password
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("has_password", &self.password.is_some())
            .field("roles", &self.roles)
            .field("delete_at", &self.delete_at)
            .finish()
    }
}

impl User {
    /// Build a user for account creation.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Some(password.into()),
            ..Default::default()
        }
    }

    /// Whether the user holds the system admin role.
    pub fn is_system_admin(&self) -> bool {
        self.roles.contains(&Role::SystemAdmin)
    }
}
