//! recoverly-community/crates/rc-thread/src/lib.rs
//!
//! Flat-to-tree comment assembly and live mutation for the community
//! feed: forest construction from store snapshots, in-place reply
//! insertion and removal, and the per-session subtree visibility map.

pub mod mutate;
pub mod tree;
pub mod visibility;

// Re-exporting for easier access in other crates
pub use mutate::{detach_node, find_node, find_node_mut, insert_reply, remove_node};
pub use tree::{build, node_count, CommentNode};
pub use visibility::VisibilityTracker;
