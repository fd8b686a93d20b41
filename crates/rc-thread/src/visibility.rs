//! # Subtree Visibility
//!
//! A sparse expanded/collapsed map keyed by comment id, kept separate
//! from the tree structure because expansion is a view concern layered
//! on the same ids. Per-session only, never persisted.

use std::collections::HashMap;

use uuid::Uuid;

/// Tracks which comment subtrees are expanded. Unknown ids are collapsed.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    expanded: HashMap<Uuid, bool>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expanded flag for `id`, treating an absent entry as collapsed.
    pub fn toggle(&mut self, id: Uuid) {
        let flag = self.expanded.entry(id).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }
}
