//! Error types shared by the crate's data structures.

use thiserror::Error;

/// Errors reported by [`DisjointSet`](crate::DisjointSet).
///
/// Graph operations are total and never fail; traversal from an unknown
/// source is a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A disjoint set was requested with a non-positive element count.
    #[error("disjoint set requires a positive element count, got {0}")]
    InvalidElementCount(i128),

    /// An element index fell outside `0..len`.
    #[error("element index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
