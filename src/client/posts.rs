//! Post endpoints.

use super::{routes, ApiResponse, ClientError, MattermostClient};
use crate::model::{Post, PostList, StatusOk};

impl MattermostClient {
    pub async fn create_post(&self, post: &Post) -> Result<ApiResponse<Post>, ClientError> {
        self.post(routes::posts(), post).await
    }

    pub async fn get_post(
        &self,
        post_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Post>, ClientError> {
        self.get(routes::post(post_id), etag).await
    }

    pub async fn pin_post(&self, post_id: &str) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.post_empty(routes::post(post_id).join("pin"))
            .await
    }

    pub async fn unpin_post(&self, post_id: &str) -> Result<ApiResponse<StatusOk>, ClientError> {
        self.post_empty(routes::post(post_id).join("unpin"))
            .await
    }

    /// A page of posts in a channel, newest first.
    pub async fn get_posts_for_channel(
        &self,
        channel_id: &str,
        page: u32,
        per_page: u32,
        etag: Option<&str>,
    ) -> Result<ApiResponse<PostList>, ClientError> {
        self.get_with_query(
            routes::channel(channel_id).join("posts"),
            &[("page", page), ("per_page", per_page)],
            etag,
        )
        .await
    }
}
