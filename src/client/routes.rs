//! Endpoint paths, relative to the `/api/v4` base.
//!
//! A [`Route`] holds raw segments. They are percent-encoded one by one when
//! the request URL is built, so a caller-supplied id or name can never add
//! path segments or a query string.

use std::fmt;

use super::ClientError;

/// An API path as a list of unencoded segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    segments: Vec<String>,
}

impl Route {
    fn root(segment: &str) -> Self {
        Self {
            segments: vec![segment.to_string()],
        }
    }

    /// Append one segment.
    pub(crate) fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Reject segments the URL parser would drop or resolve.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` for an empty, `.` or `..` segment.
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        match self
            .segments
            .iter()
            .find(|s| s.is_empty() || s.as_str() == "." || s.as_str() == "..")
        {
            Some(bad) => Err(ClientError::InvalidUrl(format!(
                "invalid path segment {:?} in {}",
                bad, self
            ))),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

pub(crate) fn users() -> Route {
    Route::root("users")
}

pub(crate) fn user(user_id: &str) -> Route {
    users().join(user_id)
}

pub(crate) fn user_by_username(username: &str) -> Route {
    users().join("username").join(username)
}

pub(crate) fn teams() -> Route {
    Route::root("teams")
}

pub(crate) fn team(team_id: &str) -> Route {
    teams().join(team_id)
}

pub(crate) fn team_by_name(team_name: &str) -> Route {
    teams().join("name").join(team_name)
}

pub(crate) fn team_members(team_id: &str) -> Route {
    team(team_id).join("members")
}

pub(crate) fn channels() -> Route {
    Route::root("channels")
}

pub(crate) fn channel(channel_id: &str) -> Route {
    channels().join(channel_id)
}

pub(crate) fn channel_members(channel_id: &str) -> Route {
    channel(channel_id).join("members")
}

pub(crate) fn channel_member(channel_id: &str, user_id: &str) -> Route {
    channel_members(channel_id).join(user_id)
}

pub(crate) fn channels_for_team(team_id: &str) -> Route {
    team(team_id).join("channels")
}

pub(crate) fn channels_for_team_for_user(user_id: &str, team_id: &str) -> Route {
    user(user_id).join("teams").join(team_id).join("channels")
}

pub(crate) fn posts() -> Route {
    Route::root("posts")
}

pub(crate) fn post(post_id: &str) -> Route {
    posts().join(post_id)
}
