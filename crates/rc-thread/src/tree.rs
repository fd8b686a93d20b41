//! # Comment Tree Assembly
//!
//! Turns the flat, creation-ordered comment list the store delivers into
//! a forest of root comments with arbitrarily nested replies. The forest
//! is a derived, disposable cache: it is rebuilt wholesale on every full
//! resync and mutated in place between syncs (see `mutate`).

use std::collections::{HashMap, HashSet};

use rc_core::CommentRecord;
use serde::Serialize;
use uuid::Uuid;

/// A comment record plus its nested replies, in arrival order.
///
/// Serializes as the record's own fields with a `replies` array alongside,
/// which is exactly the shape the render layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub record: CommentRecord,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn new(record: CommentRecord) -> Self {
        Self { record, replies: Vec::new() }
    }

    pub fn id(&self) -> Uuid {
        self.record.id
    }
}

/// Assemble a forest from a flat record list, two passes, O(n).
///
/// Pass one buckets every reply under its parent id, preserving input
/// order; pass two assembles roots recursively, draining buckets as it
/// goes. Input order is ascending creation time, so within any node's
/// `replies` the order is ascending creation time too.
///
/// Replies whose parent id does not resolve to any record in the snapshot
/// (parent deleted, or paginated out) are dropped from the forest, with a
/// warning carrying the count. Cyclic parent references cannot occur with
/// single-parent records, but malformed input simply leaves its bucket
/// undrained rather than looping.
pub fn build(records: Vec<CommentRecord>) -> Vec<CommentNode> {
    let total = records.len();
    let known_ids: HashSet<Uuid> = records.iter().map(|r| r.id).collect();

    let mut roots: Vec<CommentRecord> = Vec::new();
    let mut children: HashMap<Uuid, Vec<CommentRecord>> = HashMap::new();
    for record in records {
        match record.parent_id {
            None => roots.push(record),
            Some(parent) if known_ids.contains(&parent) => {
                children.entry(parent).or_default().push(record);
            }
            Some(_) => {
                // Parent never loaded; the reply has nowhere to attach.
            }
        }
    }

    let forest: Vec<CommentNode> = roots
        .into_iter()
        .map(|record| assemble(record, &mut children))
        .collect();

    let assembled = node_count(&forest);
    if assembled < total {
        tracing::warn!(
            dropped = total - assembled,
            "dropped comments with unresolved parents during tree build"
        );
    }

    forest
}

fn assemble(record: CommentRecord, children: &mut HashMap<Uuid, Vec<CommentRecord>>) -> CommentNode {
    let mut node = CommentNode::new(record);
    if let Some(replies) = children.remove(&node.record.id) {
        node.replies = replies
            .into_iter()
            .map(|record| assemble(record, children))
            .collect();
    }
    node
}

/// Total number of nodes reachable from the forest roots.
pub fn node_count(forest: &[CommentNode]) -> usize {
    forest.iter().map(|n| 1 + node_count(&n.replies)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(n: u128, parent: Option<u128>) -> CommentRecord {
        CommentRecord {
            id: Uuid::from_u128(n),
            post_id: Uuid::from_u128(999),
            parent_id: parent.map(Uuid::from_u128),
            text: format!("comment {n}"),
            user_id: format!("user-{n}"),
            user_name: format!("User {n}"),
            is_anonymous: false,
            created_at: Utc::now() + Duration::seconds(n as i64),
            reply_count: 0,
        }
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build(Vec::new()).is_empty());
    }

    #[test]
    fn flat_roots_keep_input_order_with_empty_replies() {
        let forest = build(vec![record(1, None), record(2, None), record(3, None)]);
        assert_eq!(forest.len(), 3);
        for (i, node) in forest.iter().enumerate() {
            assert_eq!(node.id(), Uuid::from_u128(i as u128 + 1));
            assert!(node.replies.is_empty());
        }
    }

    #[test]
    fn chain_nests_to_arbitrary_depth() {
        let forest = build(vec![record(1, None), record(2, Some(1)), record(3, Some(2))]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].id(), Uuid::from_u128(2));
        assert_eq!(forest[0].replies[0].replies[0].id(), Uuid::from_u128(3));
        assert!(forest[0].replies[0].replies[0].replies.is_empty());
    }

    #[test]
    fn mixed_roots_and_nested_replies() {
        // records: 1 (root), 2 (reply to 1), 3 (root), 4 (reply to 2)
        let forest = build(vec![
            record(1, None),
            record(2, Some(1)),
            record(3, None),
            record(4, Some(2)),
        ]);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].id(), Uuid::from_u128(1));
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].id(), Uuid::from_u128(2));
        assert_eq!(forest[0].replies[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].replies[0].id(), Uuid::from_u128(4));
        assert!(forest[0].replies[0].replies[0].replies.is_empty());
        assert_eq!(forest[1].id(), Uuid::from_u128(3));
        assert!(forest[1].replies.is_empty());
    }

    #[test]
    fn sibling_replies_keep_creation_order() {
        let forest = build(vec![
            record(1, None),
            record(2, Some(1)),
            record(3, Some(1)),
            record(4, Some(1)),
        ]);
        let ids: Vec<Uuid> = forest[0].replies.iter().map(CommentNode::id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(2), Uuid::from_u128(3), Uuid::from_u128(4)]);
    }

    #[test]
    fn orphaned_reply_is_dropped_from_the_forest() {
        // Parent 7 is not in the snapshot (paginated out or deleted).
        let forest = build(vec![record(1, None), record(2, Some(7))]);
        assert_eq!(forest.len(), 1);
        assert_eq!(node_count(&forest), 1);
    }

    #[test]
    fn descendants_of_orphans_vanish_with_them() {
        let forest = build(vec![record(1, None), record(2, Some(7)), record(3, Some(2))]);
        assert_eq!(node_count(&forest), 1);
    }
}
