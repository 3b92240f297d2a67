use serde::{Deserialize, Serialize};

use super::user::Role;
use crate::coded::{self, coded_enum};

coded_enum! {
    /// Channel visibility and kind.
    pub enum ChannelType {
        /// Public channel, visible to every team member
        Open => "O",
        /// Private channel, invite only
        Private => "P",
        /// Direct message between two users
        Direct => "D",
        /// Group message between three to eight users
        Group => "G",
    }
}

coded_enum! {
    /// Notification level for desktop, email and push.
    pub enum NotifyLevel {
        /// Follow the user's global setting
        Default => "default",
        /// Every message
        All => "all",
        /// Mentions only
        Mention => "mention",
        /// Never
        None => "none",
    }
}

coded_enum! {
    /// When a channel is shown as unread.
    pub enum MarkUnread {
        All => "all",
        Mention => "mention",
    }
}

/// A channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
    pub team_id: String,
    #[serde(
        rename = "type",
        with = "coded::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_type: Option<ChannelType>,
    pub display_name: String,
    pub name: String,
    pub header: String,
    pub purpose: String,
    pub last_post_at: i64,
    pub total_msg_count: i64,
    pub extra_update_at: i64,
    pub creator_id: String,
}

impl Channel {
    /// Build a channel with the fields the server requires on create.
    pub fn new(
        display_name: impl Into<String>,
        name: impl Into<String>,
        channel_type: ChannelType,
        team_id: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            channel_type: Some(channel_type),
            team_id: team_id.into(),
            ..Default::default()
        }
    }

    /// Whether the channel has been archived.
    pub fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }
}

/// Partial channel update; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Per-member notification preferences for a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelNotifyProps {
    #[serde(with = "coded::lenient", skip_serializing_if = "Option::is_none")]
    pub desktop: Option<NotifyLevel>,
    #[serde(with = "coded::lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<NotifyLevel>,
    #[serde(with = "coded::lenient", skip_serializing_if = "Option::is_none")]
    pub push: Option<NotifyLevel>,
    #[serde(with = "coded::lenient", skip_serializing_if = "Option::is_none")]
    pub mark_unread: Option<MarkUnread>,
}

/// A user's membership in a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelMember {
    pub channel_id: String,
    pub user_id: String,
    #[serde(with = "coded::space_separated")]
    pub roles: Vec<Role>,
    pub last_viewed_at: i64,
    pub msg_count: i64,
    pub mention_count: i64,
    pub notify_props: ChannelNotifyProps,
    pub last_update_at: i64,
}

impl ChannelMember {
    /// Whether the member holds the channel admin role.
    pub fn is_channel_admin(&self) -> bool {
        self.roles.contains(&Role::ChannelAdmin)
    }
}

/// Channel statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelStats {
    pub channel_id: String,
    pub member_count: i64,
}

/// Unread counters for one user in one channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelUnread {
    pub team_id: String,
    pub channel_id: String,
    pub msg_count: i64,
    pub mention_count: i64,
}

/// Marks a channel as viewed, optionally leaving another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelView {
    pub channel_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prev_channel_id: String,
}

impl ChannelView {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            prev_channel_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coded::CodedEnum;

    #[test]
    fn channel_type_codes() {
        assert_eq!(ChannelType::Open.code(), "O");
        assert_eq!(ChannelType::Private.code(), "P");
        assert_eq!(ChannelType::Direct.code(), "D");
        assert_eq!(ChannelType::Group.code(), "G");
        assert_eq!(ChannelType::resolve("o"), None);
    }

    #[test]
    fn new_channel_serializes_type_code() {
        let channel = Channel::new("Town Square", "town-square", ChannelType::Open, "team1");
        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json["type"], "O");
        assert_eq!(json["team_id"], "team1");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn channel_without_type_omits_field() {
        let channel = Channel {
            id: "abc".to_string(),
            name: "renamed".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&channel).unwrap();
        assert!(json.get("type").is_none());
        assert_eq!(json["id"], "abc");
    }

    #[test]
    fn decodes_server_channel() {
        let channel: Channel = serde_json::from_str(
            r#"{
                "id": "ch1",
                "create_at": 1500000000000,
                "update_at": 1500000000000,
                "delete_at": 0,
                "team_id": "team1",
                "type": "P",
                "display_name": "Secret",
                "name": "secret",
                "header": "",
                "purpose": "",
                "last_post_at": 0,
                "total_msg_count": 3,
                "extra_update_at": 0,
                "creator_id": "u1",
                "scheme_id": null
            }"#,
        )
        .unwrap();
        assert_eq!(channel.channel_type, Some(ChannelType::Private));
        assert_eq!(channel.total_msg_count, 3);
        assert!(!channel.is_deleted());
    }

    #[test]
    fn unknown_channel_type_is_absent() {
        let channel: Channel = serde_json::from_str(r#"{"id":"ch1","type":"X"}"#).unwrap();
        assert_eq!(channel.id, "ch1");
        assert_eq!(channel.channel_type, None);
    }

    #[test]
    fn numeric_channel_type_is_decode_error() {
        assert!(serde_json::from_str::<Channel>(r#"{"id":"ch1","type":1}"#).is_err());
    }

    #[test]
    fn patch_sends_only_set_fields() {
        let patch = ChannelPatch {
            display_name: Some("New".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"display_name":"New"}"#
        );
    }

    #[test]
    fn member_roles_and_notify_props() {
        let member: ChannelMember = serde_json::from_str(
            r#"{
                "channel_id": "ch1",
                "user_id": "u1",
                "roles": "channel_user channel_admin",
                "notify_props": {
                    "desktop": "default",
                    "email": "default",
                    "mark_unread": "all",
                    "push": "mention"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(member.roles, vec![Role::ChannelUser, Role::ChannelAdmin]);
        assert!(member.is_channel_admin());
        assert_eq!(member.notify_props.desktop, Some(NotifyLevel::Default));
        assert_eq!(member.notify_props.push, Some(NotifyLevel::Mention));
        assert_eq!(member.notify_props.mark_unread, Some(MarkUnread::All));
    }

    #[test]
    fn view_omits_empty_prev_channel() {
        let view = ChannelView::new("ch1");
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"channel_id":"ch1"}"#
        );
    }
}
