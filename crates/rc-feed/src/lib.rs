//! recoverly-community/crates/rc-feed/src/lib.rs
//!
//! The orchestration layer binding moderation and tree assembly to the
//! remote store port for one live comment section.

pub mod feed;

pub use feed::{CommentDraft, CommentFeed, PostDraft};
