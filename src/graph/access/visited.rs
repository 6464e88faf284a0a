//! Visited sets for graph traversals.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which nodes a traversal has already visited.
pub(crate) struct VisitedSet<N> {
    seen: HashSet<N>,
}

impl<N: Eq + Hash + Clone> VisitedSet<N> {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: &N) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.clone())
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: &N) -> bool {
        self.seen.contains(node)
    }
}
