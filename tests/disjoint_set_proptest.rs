use grove::DisjointSet;
use proptest::prelude::*;

/// Naive partition model: every element carries a set label, union relabels.
struct Labels {
    label: Vec<usize>,
}

impl Labels {
    fn new(n: usize) -> Self {
        Self {
            label: (0..n).collect(),
        }
    }

    fn union(&mut self, a: usize, b: usize) {
        let (from, to) = (self.label[a], self.label[b]);
        for label in &mut self.label {
            if *label == from {
                *label = to;
            }
        }
    }

    fn same(&self, a: usize, b: usize) -> bool {
        self.label[a] == self.label[b]
    }
}

fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..128),
        )
    })
}

proptest! {
    #[test]
    fn test_disjoint_set_matches_label_model((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n).unwrap();
        let mut model = Labels::new(n);

        for (a, b) in ops {
            let merged = ds.union(a, b).unwrap();
            assert_eq!(merged, !model.same(a, b), "union({}, {}) result mismatch", a, b);
            model.union(a, b);
        }

        for a in 0..n {
            for b in 0..n {
                assert_eq!(ds.same_set(a, b).unwrap(), model.same(a, b), "partition mismatch for {} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_depth_bounded_by_log_size((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n).unwrap();
        for (a, b) in ops {
            ds.union(a, b).unwrap();
        }

        for idx in 0..n {
            let size = ds.set_size(idx).unwrap();
            let bound = size.ilog2() as usize;
            assert!(ds.depth(idx).unwrap() <= bound, "element {} deeper than log2({})", idx, size);
        }
    }

    #[test]
    fn test_root_sizes_cover_all_elements((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n).unwrap();
        for (a, b) in ops {
            ds.union(a, b).unwrap();
        }

        let total: usize = ds.roots().map(|root| ds.set_size(root).unwrap()).sum();
        assert_eq!(total, n);
        assert_eq!(ds.visualize().lines().count(), ds.num_sets());
        for root in ds.roots() {
            assert_eq!(ds.find(root).unwrap(), root);
        }
    }
}
