//! Depth-first and breadth-first traversals.
//!
//! Both traversals are available as lazy iterators ([`Dfs`], [`Bfs`]) that
//! yield nodes in visit order, and as callback entry points ([`dfs`], [`bfs`])
//! built on top of them. They run against any graph implementing
//! [`Neighbors`].
//!
//! Scheduling does not filter: after a node is visited every one of its
//! neighbors is pushed onto the work list, and already-visited nodes are
//! skipped when they are popped. A source without an adjacency entry yields
//! nothing.

use std::collections::VecDeque;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::access::visited::VisitedSet;
use crate::graph::access::Neighbors;
use crate::trace::trace_event;

/// An iterator for Depth-First Search (DFS).
///
/// Uses a LIFO stack. Neighbors are pushed in list order, so among siblings
/// the most recently inserted neighbor is visited first.
pub struct Dfs<'a, G: ?Sized, N> {
    graph: &'a G,
    visited: VisitedSet<N>,
    stack: Vec<N>,
}

impl<'a, G, N> Dfs<'a, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    /// Creates a new DFS iterator starting from `source`.
    pub fn new(graph: &'a G, source: &N) -> Self {
        let mut stack = Vec::new();
        if graph.contains_node(source) {
            stack.push(source.clone());
        }

        Self {
            graph,
            visited: VisitedSet::new(),
            stack,
        }
    }

    /// Number of nodes visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `node` has already been yielded.
    pub fn has_visited(&self, node: &N) -> bool {
        self.visited.is_visited(node)
    }
}

impl<G, N> Iterator for Dfs<'_, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if !self.visited.try_visit(&node) {
                continue;
            }

            self.stack
                .extend(self.graph.neighbors(&node).iter().cloned());
            return Some(node);
        }
    }
}

impl<G, N> FusedIterator for Dfs<'_, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
}

/// An iterator for Breadth-First Search (BFS).
///
/// Uses a FIFO queue, producing level-order visitation.
pub struct Bfs<'a, G: ?Sized, N> {
    graph: &'a G,
    visited: VisitedSet<N>,
    queue: VecDeque<N>,
}

impl<'a, G, N> Bfs<'a, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    /// Creates a new BFS iterator starting from `source`.
    pub fn new(graph: &'a G, source: &N) -> Self {
        let mut queue = VecDeque::new();
        if graph.contains_node(source) {
            queue.push_back(source.clone());
        }

        Self {
            graph,
            visited: VisitedSet::new(),
            queue,
        }
    }

    /// Number of nodes visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `node` has already been yielded.
    pub fn has_visited(&self, node: &N) -> bool {
        self.visited.is_visited(node)
    }
}

impl<G, N> Iterator for Bfs<'_, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.queue.pop_front()?;
            if !self.visited.try_visit(&node) {
                continue;
            }

            self.queue
                .extend(self.graph.neighbors(&node).iter().cloned());
            return Some(node);
        }
    }
}

impl<G, N> FusedIterator for Bfs<'_, G, N>
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
{
}

/// Depth-first search from `source`, calling `visit` once per reached node.
///
/// Does nothing if `source` has no adjacency entry.
///
/// ```
/// use grove::{dfs, AdjacencyList};
///
/// let graph = AdjacencyList::from_edges(true, [(0, 1), (0, 2), (0, 3)]);
/// let mut order = Vec::new();
/// dfs(&graph, &0, |node| order.push(node));
/// assert_eq!(order, [0, 3, 2, 1]);
/// ```
pub fn dfs<G, N, F>(graph: &G, source: &N, mut visit: F)
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
    F: FnMut(N),
{
    let mut walk = Dfs::new(graph, source);
    for node in walk.by_ref() {
        visit(node);
    }
    trace_event!(trace, visited = walk.visited_count(), "dfs finished");
}

/// Breadth-first search from `source`, calling `visit` once per reached node.
///
/// Does nothing if `source` has no adjacency entry.
///
/// ```
/// use grove::{bfs, AdjacencyList};
///
/// let graph = AdjacencyList::from_edges(true, [(0, 1), (0, 2), (0, 3)]);
/// let mut order = Vec::new();
/// bfs(&graph, &0, |node| order.push(node));
/// assert_eq!(order, [0, 1, 2, 3]);
/// ```
pub fn bfs<G, N, F>(graph: &G, source: &N, mut visit: F)
where
    G: Neighbors<N> + ?Sized,
    N: Eq + Hash + Clone,
    F: FnMut(N),
{
    let mut walk = Bfs::new(graph, source);
    for node in walk.by_ref() {
        visit(node);
    }
    trace_event!(trace, visited = walk.visited_count(), "bfs finished");
}
