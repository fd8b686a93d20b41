//! recoverly-community/crates/rc-core/src/lib.rs
//!
//! The central domain models and interface definitions for the community
//! content pipeline.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use uuid::Uuid;

    #[test]
    fn test_comment_record_v7() {
        let id = Uuid::now_v7();
        let comment = CommentRecord {
            id,
            post_id: Uuid::now_v7(),
            parent_id: None,
            text: "one day at a time".to_string(),
            user_id: "user-1".to_string(),
            user_name: "Sam".to_string(),
            is_anonymous: false,
            created_at: chrono::Utc::now(),
            reply_count: 0,
        };
        assert_eq!(comment.id, id);
        assert!(comment.is_root());
    }

    #[test]
    fn test_comment_record_camel_case_wire_shape() {
        let comment = CommentRecord {
            id: Uuid::now_v7(),
            post_id: Uuid::now_v7(),
            parent_id: Some(Uuid::now_v7()),
            text: "hang in there".to_string(),
            user_id: "user-2".to_string(),
            user_name: "Alex".to_string(),
            is_anonymous: true,
            created_at: chrono::Utc::now(),
            reply_count: 3,
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("parentId").is_some());
        assert!(json.get("replyCount").is_some());
        assert!(json.get("parent_id").is_none());
        assert!(!comment.is_root());
    }
}
