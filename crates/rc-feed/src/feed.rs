//! # CommentFeed
//!
//! Session-level orchestration for one post's comment section. Owns the
//! local forest and visibility map, gates every submission through the
//! moderation validator, and keeps the forest optimistically in sync
//! with the remote store: apply locally, issue the remote write, revert
//! on failure.

use std::sync::Arc;

use chrono::Utc;
use rc_core::{AppError, CommentRecord, CommentStore, PostRecord, Result};
use rc_moderation::Validator;
use rc_thread::{detach_node, insert_reply, CommentNode, VisibilityTracker};
use uuid::Uuid;

/// User input for a new comment, before ids and timestamps are assigned.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    /// `None` posts a new root comment.
    pub parent_id: Option<Uuid>,
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub is_anonymous: bool,
}

/// User input for a new post.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: String,
    pub user_name: String,
    pub is_anonymous: bool,
}

/// One post's live comment section.
///
/// Owned by a single session; the store remains the durable owner of the
/// records and wins on the next [`refresh`](CommentFeed::refresh).
pub struct CommentFeed {
    store: Arc<dyn CommentStore>,
    post_id: Uuid,
    forest: Vec<CommentNode>,
    visibility: VisibilityTracker,
    validator: Validator<'static>,
}

impl CommentFeed {
    pub fn new(store: Arc<dyn CommentStore>, post_id: Uuid) -> Self {
        Self {
            store,
            post_id,
            forest: Vec::new(),
            visibility: VisibilityTracker::new(),
            validator: Validator::new(),
        }
    }

    /// The current local forest, in store order at the last refresh plus
    /// any optimistic mutations since.
    pub fn forest(&self) -> &[CommentNode] {
        &self.forest
    }

    /// Full resync: fetch the snapshot, rebuild into a fresh forest, and
    /// swap it in. Rebuilding into a new forest keeps an in-flight
    /// mutation from ever observing a half-built tree.
    pub async fn refresh(&mut self) -> Result<()> {
        let records = self
            .store
            .fetch_comments(self.post_id)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        tracing::debug!(post_id = %self.post_id, count = records.len(), "rebuilding comment forest");
        self.forest = rc_thread::build(records);
        Ok(())
    }

    /// Validate and publish a new post. Posts live outside the comment
    /// forest, so there is no local state to revert.
    pub async fn submit_post(&self, draft: PostDraft) -> Result<Uuid> {
        let outcome = self.validator.validate_post(&draft.title, &draft.body);
        if !outcome.is_valid {
            return Err(AppError::ValidationError(
                outcome.error_message.unwrap_or_else(|| "post rejected".to_string()),
            ));
        }

        let post = PostRecord {
            id: Uuid::now_v7(),
            title: draft.title,
            body: draft.body,
            user_id: draft.user_id,
            user_name: draft.user_name,
            is_anonymous: draft.is_anonymous,
            created_at: Utc::now(),
            comment_count: 0,
        };
        let post_id = post.id;
        self.store
            .create_post(post)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(post_id)
    }

    /// Validate and publish a comment or reply, applying it to the local
    /// forest first and reverting if the remote write fails.
    pub async fn submit_comment(&mut self, draft: CommentDraft) -> Result<Uuid> {
        let outcome = self.validator.validate_comment(&draft.text);
        if !outcome.is_valid {
            return Err(AppError::ValidationError(
                outcome.error_message.unwrap_or_else(|| "comment rejected".to_string()),
            ));
        }

        let record = CommentRecord {
            id: Uuid::now_v7(),
            post_id: self.post_id,
            parent_id: draft.parent_id,
            text: draft.text,
            user_id: draft.user_id,
            user_name: draft.user_name,
            is_anonymous: draft.is_anonymous,
            created_at: Utc::now(),
            reply_count: 0,
        };
        let comment_id = record.id;

        // 1. Optimistic local apply.
        match draft.parent_id {
            Some(parent_id) => {
                if !insert_reply(&mut self.forest, parent_id, CommentNode::new(record.clone())) {
                    return Err(AppError::NotFound(
                        "parent comment".to_string(),
                        parent_id.to_string(),
                    ));
                }
            }
            None => self.forest.push(CommentNode::new(record.clone())),
        }

        // 2. Remote write; revert the local insert on failure.
        if let Err(e) = self.store.create_comment(record).await {
            detach_node(&mut self.forest, comment_id, draft.parent_id);
            return Err(AppError::Internal(e.to_string()));
        }

        // 3. Counter writes are fire-and-forget: the counters are derived
        //    data and the next refresh reconciles any drift.
        if let Some(parent_id) = draft.parent_id {
            if let Err(e) = self.store.adjust_reply_count(parent_id, 1).await {
                tracing::warn!(%parent_id, error = %e, "reply counter increment failed");
            }
        }
        if let Err(e) = self.store.adjust_comment_count(self.post_id, 1).await {
            tracing::warn!(post_id = %self.post_id, error = %e, "comment counter increment failed");
        }

        Ok(comment_id)
    }

    /// Remove a comment locally and remotely. On remote failure the
    /// detached subtree is reattached; it returns at the end of its
    /// sibling list, and the next refresh restores store order.
    pub async fn delete_comment(&mut self, comment_id: Uuid, parent_id: Option<Uuid>) -> Result<()> {
        let Some(detached) = detach_node(&mut self.forest, comment_id, parent_id) else {
            return Err(AppError::NotFound("comment".to_string(), comment_id.to_string()));
        };

        if let Err(e) = self.store.delete_comment(comment_id).await {
            match parent_id {
                Some(parent_id) => {
                    insert_reply(&mut self.forest, parent_id, detached);
                }
                None => self.forest.push(detached),
            }
            return Err(AppError::Internal(e.to_string()));
        }

        if let Some(parent_id) = parent_id {
            if let Err(e) = self.store.adjust_reply_count(parent_id, -1).await {
                tracing::warn!(%parent_id, error = %e, "reply counter decrement failed");
            }
        }
        if let Err(e) = self.store.adjust_comment_count(self.post_id, -1).await {
            tracing::warn!(post_id = %self.post_id, error = %e, "comment counter decrement failed");
        }

        Ok(())
    }

    /// Render-path censoring for any title/body/comment text.
    pub fn display_text(&self, text: &str) -> String {
        self.validator.display_text(text)
    }

    /// Flip whether a comment's reply subtree is shown.
    pub fn toggle_replies(&mut self, comment_id: Uuid) {
        self.visibility.toggle(comment_id);
    }

    /// The render layer checks this before recursing into a node's replies.
    pub fn replies_expanded(&self, comment_id: Uuid) -> bool {
        self.visibility.is_expanded(comment_id)
    }
}
