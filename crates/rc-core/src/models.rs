//! # Domain Models
//!
//! These structs mirror the documents the remote store hands us for the
//! social feed. Field names serialize in camelCase because the store is the
//! authority on document shape; everything here is read-mostly input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A feed post as stored remotely. Title and body pass through the
/// moderation gate before the store ever sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub user_id: String,
    /// Display name at posting time; "Anonymous" handling is a render concern.
    pub user_name: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    /// Denormalized counter maintained by the store.
    pub comment_count: i64,
}

/// A single comment document, flat as the store delivers it.
///
/// `parent_id = None` marks a root comment. The store returns a post's
/// comments pre-sorted by `created_at` ascending; threading is derived
/// locally from `parent_id` and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    /// Denormalized counter maintained by the store.
    pub reply_count: i64,
}

impl CommentRecord {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
