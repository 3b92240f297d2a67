//! model
//!
//! Typed mirrors of the server's JSON resources.
//!
//! # Conventions
//!
//! - Field names match the server's snake_case JSON keys.
//! - Timestamps are epoch milliseconds (`i64`); `0` means "never".
//! - Coded values (channel types, roles, ...) are `Option<T>` fields decoded
//!   with [`crate::coded::lenient`], so an unknown code yields `None`.
//!   `Post` is the exception: it keeps the raw `type` string, because the
//!   server adds system message kinds often.
//! - Every struct tolerates missing fields (`#[serde(default)]`) because the
//!   server omits empty values.

mod channel;
mod content_type;
mod error;
mod id;
mod post;
mod team;
mod user;

pub use channel::{
    Channel, ChannelMember, ChannelNotifyProps, ChannelPatch, ChannelStats, ChannelType,
    ChannelUnread, ChannelView, MarkUnread, NotifyLevel,
};
pub use content_type::ContentType;
pub use error::{AppError, StatusOk};
pub use id::{is_valid_id, new_id, ID_LEN};
pub use post::{Post, PostList, PostType};
pub use team::{Team, TeamMember, TeamType};
pub use user::{Role, User};

use chrono::{DateTime, Utc};

/// Convert an epoch-millisecond timestamp, treating `0` as unset.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}
