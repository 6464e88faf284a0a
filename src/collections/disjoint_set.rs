//! Disjoint Set (Union-Find) with union-by-size and no path compression.
//!
//! `find` is a pure upward walk over parent links, so the forest shape is
//! determined entirely by the sequence of `union` calls. Attaching the smaller
//! set under the larger one keeps every tree at height at most
//! `floor(log2(set size))`: an element only moves one level deeper when its set
//! at least doubles.
//!
//! # Performance
//!
//! | Operation    | Complexity      |
//! |--------------|-----------------|
//! | `find`       | \(O(\log n)\)   |
//! | `union`      | \(O(\log n)\)   |
//! | `num_sets`   | \(O(n)\)        |
//! | `visualize`  | \(O(n \log n)\) |

use std::collections::BTreeMap;
use std::fmt;

use num_traits::PrimInt;

use crate::error::{Error, Result};
use crate::trace::trace_event;

/// A fixed-size Disjoint Set (Union-Find) over the elements `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    /// Parent pointers; `parent[i] == i` marks a root.
    parent: Vec<usize>,
    /// Element count per set. Only meaningful at roots.
    set_size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets with ids `0..n`.
    ///
    /// Accepts any primitive integer so that signed counts can be rejected
    /// rather than wrapped.
    ///
    /// # Errors
    /// Returns [`Error::InvalidElementCount`] when `n <= 0` or when `n` does not
    /// fit in a `usize`.
    pub fn new<N: PrimInt>(n: N) -> Result<Self> {
        let len = n
            .to_usize()
            .filter(|&len| len > 0)
            .ok_or_else(|| Error::InvalidElementCount(n.to_i128().unwrap_or(i128::MAX)))?;

        trace_event!(debug, elements = len, "disjoint set created");

        Ok(Self {
            parent: (0..len).collect(),
            set_size: vec![1; len],
        })
    }

    /// Returns the number of elements tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always `false`: a disjoint set holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative (root) of the set containing `idx`.
    ///
    /// Parent pointers are left untouched.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= self.len()`.
    pub fn find(&self, idx: usize) -> Result<usize> {
        self.check(idx)?;
        Ok(self.walk(idx).0)
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// The root of the larger set becomes the parent. `a`'s root is kept only
    /// when its set is strictly larger; on equal sizes `b`'s root wins.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `a` and `b`
    /// already shared a root.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either index is out of range. The
    /// structure is unchanged in that case.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(false);
        }

        let (parent, child) = if self.set_size[root_a] > self.set_size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[child] = parent;
        self.set_size[parent] += self.set_size[child];

        trace_event!(
            trace,
            parent,
            child,
            size = self.set_size[parent],
            "merged sets"
        );

        Ok(true)
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either index is out of range.
    pub fn same_set(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Counts the distinct sets, i.e. the elements that are their own root.
    pub fn num_sets(&self) -> usize {
        self.roots().count()
    }

    /// Iterates over set representatives in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(idx, &parent)| idx == parent)
            .map(|(idx, _)| idx)
    }

    /// Number of parent links between `idx` and its root.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= self.len()`.
    pub fn depth(&self, idx: usize) -> Result<usize> {
        self.check(idx)?;
        Ok(self.walk(idx).1)
    }

    /// Number of elements in the set containing `idx`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= self.len()`.
    pub fn set_size(&self, idx: usize) -> Result<usize> {
        let root = self.find(idx)?;
        Ok(self.set_size[root])
    }

    /// Renders the forest for debugging, one line per set.
    ///
    /// Each line lists the depth buckets of one set in increasing depth as
    /// `d_<depth>=(<elements>)`, elements ascending and comma-separated. Lines
    /// are ordered by root and joined with `\n` without a trailing newline, so
    /// the line count equals [`num_sets`](Self::num_sets).
    ///
    /// ```
    /// use grove::DisjointSet;
    ///
    /// let mut ds = DisjointSet::new(4).unwrap();
    /// ds.union(1, 3).unwrap();
    /// assert_eq!(ds.visualize(), "d_0=(0)\nd_0=(2)\nd_0=(3) d_1=(1)");
    /// ```
    pub fn visualize(&self) -> String {
        self.to_string()
    }

    fn check(&self, idx: usize) -> Result<()> {
        if idx < self.parent.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: idx,
                len: self.parent.len(),
            })
        }
    }

    /// Walks from an in-range `idx` to its root, returning `(root, depth)`.
    fn walk(&self, mut idx: usize) -> (usize, usize) {
        let mut depth = 0;
        while self.parent[idx] != idx {
            idx = self.parent[idx];
            depth += 1;
        }
        (idx, depth)
    }

    /// Groups elements by root, then by depth below that root.
    fn layers(&self) -> BTreeMap<usize, BTreeMap<usize, Vec<usize>>> {
        let mut layers: BTreeMap<usize, BTreeMap<usize, Vec<usize>>> = BTreeMap::new();
        // Ascending iteration keeps every bucket sorted.
        for idx in 0..self.parent.len() {
            let (root, depth) = self.walk(idx);
            layers
                .entry(root)
                .or_default()
                .entry(depth)
                .or_default()
                .push(idx);
        }
        layers
    }
}

impl fmt::Display for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, buckets) in self.layers().values().enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            for (bucket, (depth, elements)) in buckets.iter().enumerate() {
                if bucket > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "d_{depth}=(")?;
                for (pos, element) in elements.iter().enumerate() {
                    if pos > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")?;
            }
        }
        Ok(())
    }
}
