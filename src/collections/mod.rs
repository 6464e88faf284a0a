//! Set-partition collections.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
