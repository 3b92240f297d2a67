//! User and session endpoints.

use serde::Serialize;

use super::{routes, ApiResponse, ClientError, MattermostClient, TOKEN_HEADER};
use crate::model::{StatusOk, User};

/// Request body for login.
#[derive(Serialize)]
struct LoginBody<'a> {
    login_id: &'a str,
    password: &'a str,
}

impl MattermostClient {
    /// Log in with username or email and password.
    ///
    /// On success the session token from the response is kept and sent
    /// with every later request.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` if the server accepted the login but sent no
    /// session token.
    pub async fn login(
        &self,
        login_id: &str,
        password: &str,
    ) -> Result<ApiResponse<User>, ClientError> {
        let body = LoginBody { login_id, password };
        let response: ApiResponse<User> =
            self.post(routes::users().join("login"), &body).await?;

        if !response.has_error() {
            let token = response.header(TOKEN_HEADER).ok_or_else(|| {
                ClientError::AuthFailed("login response carried no session token".into())
            })?;
            self.set_access_token(token);
            tracing::debug!(login_id, "logged in");
        }
        Ok(response)
    }

    /// End the session. The local token is dropped whatever the server says.
    pub async fn logout(&self) -> Result<ApiResponse<StatusOk>, ClientError> {
        if !self.has_token() {
            return Err(ClientError::AuthRequired);
        }
        let response = self
            .post_empty(routes::users().join("logout"))
            .await;
        self.clear_access_token();
        response
    }

    /// The logged-in user.
    pub async fn get_me(&self) -> Result<ApiResponse<User>, ClientError> {
        self.get(routes::user("me"), None).await
    }

    pub async fn get_user(
        &self,
        user_id: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<User>, ClientError> {
        self.get(routes::user(user_id), etag).await
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<User>, ClientError> {
        self.get(routes::user_by_username(username), etag).await
    }

    /// Create a user account. `user.password` must be set.
    pub async fn create_user(&self, user: &User) -> Result<ApiResponse<User>, ClientError> {
        self.post(routes::users(), user).await
    }
}
