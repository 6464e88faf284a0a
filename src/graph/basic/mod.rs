//! Basic graph implementations.
//!
//! This module contains the adjacency-list representation and the
//! depth-first / breadth-first traversals that run over it.

pub mod adj_list;
pub mod algorithms;

pub use adj_list::{Adjacencies, AdjacencyList};
pub use algorithms::{bfs, dfs, Bfs, Dfs};
