//! Team endpoints.

use super::{routes, ApiResponse, ClientError, MattermostClient};
use crate::model::{Team, TeamMember};

impl MattermostClient {
    pub async fn create_team(&self, team: &Team) -> Result<ApiResponse<Team>, ClientError> {
        self.post(routes::teams(), team).await
    }

    pub async fn get_team(
        &self,
        team_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Team>, ClientError> {
        self.get(routes::team(team_id), etag).await
    }

    pub async fn get_team_by_name(
        &self,
        team_name: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<Team>, ClientError> {
        self.get(routes::team_by_name(team_name), etag).await
    }

    /// Add a user to a team.
    pub async fn add_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<TeamMember>, ClientError> {
        let member = TeamMember::new(team_id, user_id);
        self.post(routes::team_members(team_id), &member).await
    }
}
