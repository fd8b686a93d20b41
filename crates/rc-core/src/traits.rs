//! # Core Traits (Ports)
//!
//! The remote document store is an external collaborator; any backend must
//! implement this trait to be driven by the feed layer.

use crate::models::{CommentRecord, PostRecord};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence contract for posts, comments, and their denormalized counters.
///
/// Implementations are expected to be eventually consistent with the local
/// view: callers apply mutations optimistically and reconcile on the next
/// full fetch.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// All comments for a post, ordered by creation time ascending.
    async fn fetch_comments(&self, post_id: Uuid) -> anyhow::Result<Vec<CommentRecord>>;

    async fn create_comment(&self, comment: CommentRecord) -> anyhow::Result<()>;

    /// Id-based delete. Deleting an id the store no longer has is not an error.
    async fn delete_comment(&self, comment_id: Uuid) -> anyhow::Result<()>;

    async fn create_post(&self, post: PostRecord) -> anyhow::Result<()>;

    /// Adjust a post's comment counter by `delta` (negative to decrement).
    async fn adjust_comment_count(&self, post_id: Uuid, delta: i64) -> anyhow::Result<()>;

    /// Adjust a parent comment's reply counter by `delta`.
    async fn adjust_reply_count(&self, comment_id: Uuid, delta: i64) -> anyhow::Result<()>;
}
