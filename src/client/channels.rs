//! Channel endpoints.

use serde::Serialize;

use super::{routes, ApiResponse, ClientError, MattermostClient};
use crate::coded;
use crate::model::{
    Channel, ChannelMember, ChannelNotifyProps, ChannelPatch, ChannelStats, ChannelUnread,
    ChannelView, PostList, Role, StatusOk,
};

/// Request body for adding a channel member.
#[derive(Serialize)]
struct AddMemberBody<'a> {
    user_id: &'a str,
}

/// Request body for replacing a member's roles.
#[derive(Serialize)]
struct UpdateRolesBody {
    roles: String,
}

impl MattermostClient {
    /// Create a public or private channel.
    ///
    /// Direct and group channels have their own endpoints; the server
    /// rejects them here with 400.
    pub async fn create_channel(
        &self,
        channel: &Channel,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.post(routes::channels(), channel).await
    }

    /// Create (or fetch the existing) direct channel between two users.
    pub async fn create_direct_channel(
        &self,
        user_id1: &str,
        user_id2: &str,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.post(routes::channels().join("direct"), &[user_id1, user_id2])
            .await
    }

    /// Create a group channel. The server requires three to eight users.
    pub async fn create_group_channel<S: AsRef<str>>(
        &self,
        user_ids: &[S],
    ) -> Result<ApiResponse<Channel>, ClientError> {
        let ids: Vec<&str> = user_ids.iter().map(AsRef::as_ref).collect();
        self.post(routes::channels().join("group"), &ids)
            .await
    }

    /// Public channels of a team, selected by id.
    pub async fn get_public_channels_by_ids_for_team<S: AsRef<str>>(
        &self,
        team_id: &str,
        channel_ids: &[S],
    ) -> Result<ApiResponse<Vec<Channel>>, ClientError> {
        let ids: Vec<&str> = channel_ids.iter().map(AsRef::as_ref).collect();
        self.post(routes::channels_for_team(team_id).join("ids"), &ids)
            .await
    }

    pub async fn get_channel(
        &self,
        channel_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.get(routes::channel(channel_id), etag).await
    }

    /// Replace a channel's mutable fields. `channel.id` selects the channel.
    pub async fn update_channel(
        &self,
        channel: &Channel,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.put(routes::channel(&channel.id), channel).await
    }

    /// Archive a channel.
    pub async fn delete_channel(
        &self,
        channel_id: &str,
    ) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.delete(routes::channel(channel_id)).await
    }

    pub async fn patch_channel(
        &self,
        channel_id: &str,
        patch: &ChannelPatch,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.put(routes::channel(channel_id).join("patch"), patch)
            .await
    }

    /// Restore an archived channel.
    pub async fn restore_channel(
        &self,
        channel_id: &str,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.post_empty(routes::channel(channel_id).join("restore"))
            .await
    }

    pub async fn get_channel_stats(
        &self,
        channel_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<ChannelStats>, ClientError> {
        self.get(routes::channel(channel_id).join("stats"), etag)
            .await
    }

    pub async fn get_pinned_posts(
        &self,
        channel_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<PostList>, ClientError> {
        self.get(routes::channel(channel_id).join("pinned"), etag)
            .await
    }

    pub async fn get_channel_by_name(
        &self,
        channel_name: &str,
        team_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.get(
            routes::channels_for_team(team_id)
                .join("name")
                .join(channel_name),
            etag,
        )
        .await
    }

    pub async fn get_channel_by_name_for_team_name(
        &self,
        channel_name: &str,
        team_name: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Channel>, ClientError> {
        self.get(
            routes::team_by_name(team_name)
                .join("channels")
                .join("name")
                .join(channel_name),
            etag,
        )
        .await
    }

    /// A page of channel members.
    pub async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u32,
        per_page: u32,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Vec<ChannelMember>>, ClientError> {
        self.get_with_query(
            routes::channel_members(channel_id),
            &[("page", page), ("per_page", per_page)],
            etag,
        )
        .await
    }

    pub async fn get_channel_members_by_ids<S: AsRef<str>>(
        &self,
        channel_id: &str,
        user_ids: &[S],
    ) -> Result<ApiResponse<Vec<ChannelMember>>, ClientError> {
        let ids: Vec<&str> = user_ids.iter().map(AsRef::as_ref).collect();
        self.post(routes::channel_members(channel_id).join("ids"), &ids)
            .await
    }

    pub async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<ChannelMember>, ClientError> {
        self.get(routes::channel_member(channel_id, user_id), etag)
            .await
    }

    pub async fn add_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<ChannelMember>, ClientError> {
        self.post(
            routes::channel_members(channel_id),
            &AddMemberBody { user_id },
        )
        .await
    }

    pub async fn remove_user_from_channel(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.delete(routes::channel_member(channel_id, user_id))
            .await
    }

    /// Replace a member's channel roles.
    pub async fn update_channel_roles(
        &self,
        channel_id: &str,
        user_id: &str,
        roles: &[Role],
    ) -> Result<ApiResponse<StatusOk>, ClientError> {
        let body = UpdateRolesBody {
            roles: coded::join_codes(roles),
        };
        self.put(
            routes::channel_member(channel_id, user_id).join("roles"),
            &body,
        )
        .await
    }

    pub async fn update_channel_notify_props(
        &self,
        channel_id: &str,
        user_id: &str,
        props: &ChannelNotifyProps,
    ) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.put(
            routes::channel_member(channel_id, user_id).join("notify_props"),
            props,
        )
        .await
    }

    /// Mark a channel as viewed by `user_id`.
    pub async fn view_channel(
        &self,
        user_id: &str,
        view: &ChannelView,
    ) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.post(
            routes::channels()
                .join("members")
                .join(user_id)
                .join("view"),
            view,
        )
        .await
    }

    /// A user's memberships in all channels of a team.
    pub async fn get_channel_members_for_user(
        &self,
        user_id: &str,
        team_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Vec<ChannelMember>>, ClientError> {
        self.get(
            routes::channels_for_team_for_user(user_id, team_id).join("members"),
            etag,
        )
        .await
    }

    /// Channels of a team the user belongs to.
    pub async fn get_channels_for_team_for_user(
        &self,
        team_id: &str,
        user_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Vec<Channel>>, ClientError> {
        self.get(routes::channels_for_team_for_user(user_id, team_id), etag)
            .await
    }

    pub async fn get_channel_unread(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<ChannelUnread>, ClientError> {
        self.get(
            routes::user(user_id)
                .join("channels")
                .join(channel_id)
                .join("unread"),
            None,
        )
        .await
    }
}
