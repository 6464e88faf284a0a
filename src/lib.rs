//! # `grove` - Graph and Forest Building Blocks
//!
//! Two small, independent in-memory structures used as the foundation for
//! higher-level graph algorithms.
//!
//! ## Key Features
//!
//! - **Adjacency-list graph** ([`AdjacencyList`]): generic over any hashable
//!   node type, directed or undirected, with insertion-ordered neighbor lists.
//! - **Traversals** ([`dfs`], [`bfs`], [`Dfs`], [`Bfs`]): visit every node
//!   reachable from a source exactly once, as callbacks or lazy iterators.
//! - **Disjoint set** ([`DisjointSet`]): union-by-size over `0..n` with a
//!   non-mutating `find`, depth and set-size introspection, and a textual
//!   forest dump for debugging.
//!
//! ## Architecture
//!
//! The graph and the disjoint set share nothing. Traversals only see a graph
//! through the [`Neighbors`] trait, so they work over any structure that can
//! report node presence and outgoing neighbors.
//!
//! Structured logging is available through `tracing` behind the `tracing`
//! cargo feature.
//!
//! ## Example
//!
//! ```rust
//! use grove::{bfs, AdjacencyList, DisjointSet};
//!
//! let mut graph = AdjacencyList::undirected();
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//!
//! let mut reached = Vec::new();
//! bfs(&graph, &"a", |node| reached.push(node));
//! assert_eq!(reached, ["a", "b", "c"]);
//!
//! let mut sets = DisjointSet::new(4)?;
//! sets.union(0, 1)?;
//! sets.union(2, 3)?;
//! assert_eq!(sets.num_sets(), 2);
//! # Ok::<(), grove::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::DisjointSet;
pub use error::{Error, Result};
pub use graph::{bfs, dfs, Adjacencies, AdjacencyList, Bfs, Dfs, Neighbors};
