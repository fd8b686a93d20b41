//! # Live Forest Mutation
//!
//! In-place mutation primitives for the assembled forest: insert a reply
//! under any parent, remove a node by id, or detach a whole subtree.
//! These are the local half of the optimistic-update discipline; callers
//! issue the matching remote write and revert on failure (rc-feed owns
//! that wiring).

use uuid::Uuid;

use crate::tree::CommentNode;

/// Append `reply` to the replies of the node with `parent_id`, searching
/// the forest depth-first in order. Returns `false` and leaves the forest
/// unchanged when the parent is not present locally.
pub fn insert_reply(forest: &mut [CommentNode], parent_id: Uuid, reply: CommentNode) -> bool {
    try_insert(forest, parent_id, reply).is_none()
}

/// Returns the reply back to the caller when no parent was found.
fn try_insert(
    nodes: &mut [CommentNode],
    parent_id: Uuid,
    mut reply: CommentNode,
) -> Option<CommentNode> {
    for node in nodes.iter_mut() {
        if node.record.id == parent_id {
            node.replies.push(reply);
            return None;
        }
        match try_insert(&mut node.replies, parent_id, reply) {
            None => return None,
            Some(unplaced) => reply = unplaced,
        }
    }
    Some(reply)
}

/// Remove the node with `target_id`. A `parent_id` of `None` filters the
/// root list directly; otherwise the parent is located depth-first and
/// `target_id` filtered out of its replies. Returns whether a removal
/// occurred.
pub fn remove_node(forest: &mut Vec<CommentNode>, target_id: Uuid, parent_id: Option<Uuid>) -> bool {
    detach_node(forest, target_id, parent_id).is_some()
}

/// Same search as `remove_node`, but hands the removed subtree back so a
/// failed remote delete can be reverted by re-inserting it.
pub fn detach_node(
    forest: &mut Vec<CommentNode>,
    target_id: Uuid,
    parent_id: Option<Uuid>,
) -> Option<CommentNode> {
    match parent_id {
        None => {
            let position = forest.iter().position(|n| n.record.id == target_id)?;
            Some(forest.remove(position))
        }
        Some(parent_id) => {
            let parent = find_node_mut(forest, parent_id)?;
            let position = parent.replies.iter().position(|n| n.record.id == target_id)?;
            Some(parent.replies.remove(position))
        }
    }
}

/// Depth-first search by id, visiting each node before its replies.
pub fn find_node_mut(nodes: &mut [CommentNode], id: Uuid) -> Option<&mut CommentNode> {
    for node in nodes.iter_mut() {
        if node.record.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Immutable counterpart of [`find_node_mut`].
pub fn find_node(nodes: &[CommentNode], id: Uuid) -> Option<&CommentNode> {
    for node in nodes.iter() {
        if node.record.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.replies, id) {
            return Some(found);
        }
    }
    None
}
