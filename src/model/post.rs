use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::coded::{coded_enum, CodedEnum};

coded_enum! {
    /// System message kinds.
    ///
    /// Ordinary user posts carry an empty type, which resolves to no variant.
    pub enum PostType {
        JoinLeave => "system_join_leave",
        JoinChannel => "system_join_channel",
        LeaveChannel => "system_leave_channel",
        AddToChannel => "system_add_to_channel",
        RemoveFromChannel => "system_remove_from_channel",
        JoinTeam => "system_join_team",
        LeaveTeam => "system_leave_team",
        AddToTeam => "system_add_to_team",
        RemoveFromTeam => "system_remove_from_team",
        AddRemove => "system_add_remove",
        HeaderChange => "system_header_change",
        DisplayNameChange => "system_displayname_change",
        PurposeChange => "system_purpose_change",
        ChannelDeleted => "system_channel_deleted",
        Ephemeral => "system_ephemeral",
        Generic => "system_generic",
    }
}

const SYSTEM_TYPE_PREFIX: &str = "system_";

/// A message in a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub edit_at: i64,
    pub delete_at: i64,
    pub is_pinned: bool,
    pub user_id: String,
    pub channel_id: String,
    pub root_id: String,
    pub parent_id: String,
    pub original_id: String,
    pub message: String,
    /// Raw `type` code. Kept as sent so newer system kinds survive a
    /// round trip; see [`Post::post_type`].
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_code: String,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub props: serde_json::Map<String, serde_json::Value>,
    pub hashtags: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pending_post_id: String,
}

impl Post {
    /// Build a post for creation.
    pub fn new(channel_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// The known system kind, if the type code resolves to one.
    pub fn post_type(&self) -> Option<PostType> {
        PostType::resolve(&self.type_code)
    }

    /// Whether the post is a system message rather than user content.
    ///
    /// Decided on the raw code, so system kinds this crate does not list
    /// still count.
    pub fn is_system_message(&self) -> bool {
        self.type_code.starts_with(SYSTEM_TYPE_PREFIX)
    }
}

/// An ordered page of posts.
///
/// `order` lists post ids newest first; `posts` holds the bodies, which may
/// include thread parents not listed in `order`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostList {
    pub order: Vec<String>,
    pub posts: HashMap<String, Post>,
}

impl PostList {
    /// Number of posts in `order`.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Posts in `order`, skipping ids without a body.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.order.iter().filter_map(|id| self.posts.get(id))
    }
}
