//! Graph layouts and traversals.
//!
//! - `basic`: the adjacency-list representation and its traversals
//! - `access`: the read interface traversals are written against

pub mod access;
pub mod basic;

pub use access::Neighbors;
pub use basic::{bfs, dfs, Adjacencies, AdjacencyList, Bfs, Dfs};
