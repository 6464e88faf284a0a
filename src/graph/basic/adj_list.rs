//! Adjacency List Graph
//!
//! A graph keyed by arbitrary hashable node values. Each node maps to the
//! insertion-ordered list of its outgoing neighbors.
//!
//! # Layout
//! Node keys live in an index arena: a `HashMap` resolves a node to its slot,
//! and the keys and neighbor lists are stored in parallel vectors at that slot.
//! Iterating [`AdjacencyList::adjacencies`] therefore walks contiguous memory in
//! the order keys were first created.
//!
//! Keys are created on first touch. In directed mode only the source of an
//! edge gets a key; a node that only ever appears as a destination has no
//! entry and is treated as absent by traversals.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::access::Neighbors;

/// A directed or undirected graph stored as per-node neighbor lists.
///
/// Self-loops and parallel edges are kept as given; nothing is deduplicated.
///
/// ### Performance Characteristics
/// | Operation     | Complexity | Notes |
/// |---------------|------------|-------|
/// | `add_edge`    | \(O(1)\) amortized | One or two hash lookups plus a push |
/// | `neighbors`   | \(O(1)\) expected  | Returns a borrowed slice |
/// | `adjacencies` | \(O(V)\)           | Key insertion order |
#[derive(Debug, Clone)]
pub struct AdjacencyList<N> {
    is_directed: bool,
    slots: HashMap<N, usize>,
    nodes: Vec<N>,
    adjacency: Vec<Vec<N>>,
    edge_count: usize,
}

impl<N: Eq + Hash + Clone> AdjacencyList<N> {
    /// Creates an empty graph.
    pub fn new(is_directed: bool) -> Self {
        Self::with_capacity(is_directed, 0)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `nodes` keys.
    pub fn with_capacity(is_directed: bool, nodes: usize) -> Self {
        Self {
            is_directed,
            slots: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge sequence, applied in order.
    pub fn from_edges<I>(is_directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(is_directed);
        graph.extend(edges);
        graph
    }

    /// Returns `true` if edges are recorded in one direction only.
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    /// Adds an edge from `src` to `dst`.
    ///
    /// Appends `dst` to the neighbors of `src`. In undirected mode `src` is
    /// also appended to the neighbors of `dst`. Unseen endpoints that receive
    /// an entry are created with an empty list first.
    pub fn add_edge(&mut self, src: N, dst: N) {
        if self.is_directed {
            self.neighbors_mut(src).push(dst);
        } else {
            self.neighbors_mut(src.clone()).push(dst.clone());
            self.neighbors_mut(dst).push(src);
        }
        self.edge_count += 1;
    }

    /// Outgoing neighbors of `node` in insertion order.
    ///
    /// Returns an empty slice for a node without an entry, including nodes
    /// seen only as a destination in directed mode.
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.slots
            .get(node)
            .map_or(&[][..], |&slot| self.adjacency[slot].as_slice())
    }

    /// Iterates over `(node, neighbors)` pairs in key creation order.
    pub fn adjacencies(&self) -> Adjacencies<'_, N> {
        Adjacencies {
            nodes: self.nodes.iter(),
            adjacency: self.adjacency.iter(),
        }
    }

    /// Returns `true` if `node` has an adjacency entry.
    pub fn contains_node(&self, node: &N) -> bool {
        self.slots.contains_key(node)
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of `add_edge` calls made on this graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lookup-or-insert-empty for `node`'s neighbor list.
    fn neighbors_mut(&mut self, node: N) -> &mut Vec<N> {
        let slot = match self.slots.get(&node) {
            Some(&slot) => slot,
            None => {
                let slot = self.nodes.len();
                self.slots.insert(node.clone(), slot);
                self.nodes.push(node);
                self.adjacency.push(Vec::new());
                slot
            }
        };
        &mut self.adjacency[slot]
    }
}

impl<N: Eq + Hash + Clone> Neighbors<N> for AdjacencyList<N> {
    #[inline]
    fn contains_node(&self, node: &N) -> bool {
        AdjacencyList::contains_node(self, node)
    }

    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        AdjacencyList::neighbors(self, node)
    }
}

impl<N: Eq + Hash + Clone> Extend<(N, N)> for AdjacencyList<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (src, dst) in edges {
            self.add_edge(src, dst);
        }
    }
}

/// Iterator over the `(node, neighbors)` pairs of an [`AdjacencyList`].
///
/// Created by [`AdjacencyList::adjacencies`].
#[derive(Debug, Clone)]
pub struct Adjacencies<'a, N> {
    nodes: std::slice::Iter<'a, N>,
    adjacency: std::slice::Iter<'a, Vec<N>>,
}

impl<'a, N> Iterator for Adjacencies<'a, N> {
    type Item = (&'a N, &'a [N]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        let neighbors = self.adjacency.next()?;
        Some((node, neighbors.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<N> ExactSizeIterator for Adjacencies<'_, N> {}
impl<N> FusedIterator for Adjacencies<'_, N> {}
