//! Read access shared by graph traversals.
//!
//! Traversals only need to know whether a node is present and what its
//! outgoing neighbors are, so they are written against [`Neighbors`] rather
//! than a concrete graph type.

pub(crate) mod visited;

/// Minimal read interface a graph exposes to traversal algorithms.
pub trait Neighbors<N> {
    /// Returns `true` if `node` has an adjacency entry.
    fn contains_node(&self, node: &N) -> bool;

    /// Outgoing neighbors of `node` in insertion order; empty when unknown.
    fn neighbors(&self, node: &N) -> &[N];
}
