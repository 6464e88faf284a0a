//! Integration tests for `DisjointSet`.

use anyhow::Result;
use grove::{DisjointSet, Error};

fn max_depth(ds: &DisjointSet) -> Result<usize> {
    let mut deepest = 0;
    for idx in 0..ds.len() {
        deepest = deepest.max(ds.depth(idx)?);
    }
    Ok(deepest)
}

#[test]
fn test_bad_ctor() {
    assert_eq!(DisjointSet::new(0), Err(Error::InvalidElementCount(0)));
    assert_eq!(DisjointSet::new(-1), Err(Error::InvalidElementCount(-1)));
    assert_eq!(DisjointSet::new(0u64), Err(Error::InvalidElementCount(0)));
}

#[test]
fn test_initial_sets() -> Result<()> {
    let n = 10;
    let ds = DisjointSet::new(n)?;
    assert_eq!(ds.num_sets(), 10);
    assert_eq!(ds.len(), 10);
    assert!(!ds.is_empty());

    for idx in 0..10 {
        assert_eq!(ds.find(idx)?, idx);
        assert_eq!(ds.set_size(idx)?, 1);
    }
    Ok(())
}

#[test]
fn test_union_self() -> Result<()> {
    let mut ds = DisjointSet::new(3)?;
    assert_eq!(ds.num_sets(), 3);

    // expected sets: {0,1} {2}
    let consistent = |ds: &DisjointSet| -> Result<()> {
        assert_eq!(ds.num_sets(), 2);
        assert!(ds.same_set(0, 1)?);
        assert!(!ds.same_set(0, 2)?);
        Ok(())
    };

    assert!(ds.union(0, 1)?);
    consistent(&ds)?;

    assert!(!ds.union(1, 0)?);
    consistent(&ds)?;

    assert!(!ds.union(2, 2)?);
    assert_eq!(ds.num_sets(), 2);
    Ok(())
}

#[test]
fn test_depth_growth_shallow() -> Result<()> {
    let n = 100;
    let mut ds = DisjointSet::new(n)?;

    for i in 1..100 {
        ds.union(i - 1, i)?;
    }
    assert_eq!(ds.num_sets(), 1);

    for idx in 0..100 {
        assert!(ds.depth(idx)? < 2, "element {idx} too deep");
    }
    assert_eq!(ds.set_size(0)?, 100);
    Ok(())
}

#[test]
fn test_depth_worst_case() -> Result<()> {
    let mut ds = DisjointSet::new(8)?;

    ds.union(0, 1)?; // {0,1} {2} {3} {4} {5} {6} {7}
    ds.union(2, 3)?; // {0,1} {2,3} {4} {5} {6} {7}
    ds.union(4, 5)?; // {0,1} {2,3} {4,5} {6} {7}
    ds.union(6, 7)?; // {0,1} {2,3} {4,5} {6,7}

    ds.union(1, 2)?; // {0,1,2,3} {4,5} {6,7}
    ds.union(4, 7)?; // {0,1,2,3} {4,5,6,7}

    ds.union(1, 7)?; // {0,1,2,3,4,5,6,7}

    assert_eq!(ds.num_sets(), 1);
    assert_eq!(max_depth(&ds)?, 3);
    Ok(())
}

#[test]
fn test_visualize() -> Result<()> {
    let mut ds = DisjointSet::new(4)?;
    ds.union(1, 3)?;
    assert_eq!(ds.num_sets(), 3);
    assert_eq!(ds.visualize().lines().count(), 3);
    assert_eq!(ds.visualize(), ds.to_string());
    Ok(())
}

#[test]
fn test_visualize_single_set() -> Result<()> {
    let mut ds = DisjointSet::new(8)?;
    for (a, b) in [(0, 1), (2, 3), (4, 5), (6, 7), (1, 2), (4, 7), (1, 7)] {
        ds.union(a, b)?;
    }
    assert_eq!(ds.visualize(), "d_0=(7) d_1=(3,5,6) d_2=(1,2,4) d_3=(0)");
    Ok(())
}

#[test]
fn test_out_of_range_index() -> Result<()> {
    let mut ds = DisjointSet::new(3)?;
    let err = Error::IndexOutOfRange { index: 3, len: 3 };

    assert_eq!(ds.find(3), Err(err));
    assert_eq!(ds.union(3, 0), Err(err));
    assert_eq!(ds.union(0, 3), Err(err));
    assert_eq!(ds.depth(3), Err(err));
    assert_eq!(ds.set_size(3), Err(err));
    assert_eq!(ds.num_sets(), 3);
    Ok(())
}

#[test]
fn test_roots_ascending() -> Result<()> {
    let mut ds = DisjointSet::new(5)?;
    ds.union(4, 0)?;
    ds.union(1, 2)?;
    assert_eq!(ds.roots().collect::<Vec<_>>(), vec![0, 2, 3]);
    Ok(())
}
