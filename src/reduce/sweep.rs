use crate::Catalog;

/// Remove reducible structures of a single width
///
/// Buckets are processed by increasing gate count: each bucket is used to filter all the
/// buckets with a strictly higher gate count, after having itself been filtered by the lower ones.
/// Surviving structures keep their relative order.
pub fn remove_reducibles_in_width(catalog: &mut Catalog, width: usize) {
    let max_gate_count = catalog.max_gate_count();
    for reducing_gc in 0..=max_gate_count {
        // Taken out of the catalog while the higher buckets are filtered
        let reference = std::mem::take(catalog.bucket_mut(width, reducing_gc));
        if !reference.is_empty() {
            for target_gc in reducing_gc + 1..=max_gate_count {
                let target = catalog.bucket_mut(width, target_gc);
                let nb_before = target.len();
                target.retain(|s| !s.is_reducible(&reference));
                if target.len() != nb_before {
                    log::debug!(
                        "({}, {}) reduced ({}, {}): {} -> {}",
                        width,
                        reducing_gc,
                        width,
                        target_gc,
                        nb_before,
                        target.len()
                    );
                }
            }
        }
        *catalog.bucket_mut(width, reducing_gc) = reference;
    }
}

/// Remove structures that contain a structure of the same width with a lower gate count
///
/// A structure is removed if the literal rows of a structure from a bucket with the same
/// width and a strictly lower gate count appear as a contiguous block in its own rows.
/// Widths are processed independently. Reducing structures are taken from the buckets
/// as already filtered, so the result depends only on the catalog contents.
pub fn remove_reducibles(catalog: &mut Catalog) {
    for width in 0..catalog.nb_widths() {
        remove_reducibles_in_width(catalog, width);
    }
}

#[cfg(test)]
mod tests {
    use super::{remove_reducibles, remove_reducibles_in_width};
    use crate::catalog::stats::stats;
    use crate::reduce::tests::random_catalog;
    use crate::{Catalog, Structure};

    fn s(width: usize, gate_count: usize, rows: &[&[i32]]) -> Structure {
        Structure::new(width, gate_count, rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_single_rows() {
        let mut cat = Catalog::new(3, 1);
        cat.add(s(3, 0, &[&[1, 2]])).unwrap();
        cat.add(s(3, 1, &[&[5, 1, 2, 9]])).unwrap();
        cat.add(s(3, 1, &[&[1, 2]])).unwrap();
        remove_reducibles(&mut cat);
        cat.check();
        assert_eq!(cat.bucket(3, 0), &[s(3, 0, &[&[1, 2]])]);
        // A row is not a sub-sequence of another row
        assert_eq!(cat.bucket(3, 1), &[s(3, 1, &[&[5, 1, 2, 9]])]);
    }

    #[test]
    fn test_multiple_rows() {
        let mut cat = Catalog::new(2, 3);
        cat.add(s(2, 1, &[&[0, 1]])).unwrap();
        cat.add(s(2, 2, &[&[1], &[0]])).unwrap();
        cat.add(s(2, 2, &[&[1], &[0, 1]])).unwrap();
        cat.add(s(2, 3, &[&[2], &[1], &[0]])).unwrap();
        cat.add(s(2, 3, &[&[2], &[0], &[1]])).unwrap();
        cat.add(s(2, 3, &[&[1], &[2], &[0]])).unwrap();
        remove_reducibles(&mut cat);
        cat.check();
        assert_eq!(cat.bucket(2, 1), &[s(2, 1, &[&[0, 1]])]);
        assert_eq!(cat.bucket(2, 2), &[s(2, 2, &[&[1], &[0]])]);
        assert_eq!(
            cat.bucket(2, 3),
            &[s(2, 3, &[&[2], &[0], &[1]]), s(2, 3, &[&[1], &[2], &[0]])]
        );
    }

    #[test]
    fn test_empty_lower_buckets() {
        let mut cat = Catalog::new(1, 3);
        cat.add(s(1, 1, &[&[7], &[3]])).unwrap();
        cat.add(s(1, 2, &[&[4], &[7], &[3]])).unwrap();
        cat.add(s(1, 2, &[&[3], &[7]])).unwrap();
        cat.add(s(1, 3, &[&[7], &[3], &[7]])).unwrap();
        cat.add(s(1, 3, &[&[3], &[7], &[0]])).unwrap();
        remove_reducibles(&mut cat);
        assert!(cat.bucket(1, 0).is_empty());
        assert_eq!(cat.bucket(1, 1), &[s(1, 1, &[&[7], &[3]])]);
        assert_eq!(cat.bucket(1, 2), &[s(1, 2, &[&[3], &[7]])]);
        assert!(cat.bucket(1, 3).is_empty());
    }

    #[test]
    fn test_same_gate_count() {
        // Structures never reduce their own bucket
        let mut cat = Catalog::new(1, 1);
        cat.add(s(1, 1, &[&[1]])).unwrap();
        cat.add(s(1, 1, &[&[0], &[1]])).unwrap();
        cat.add(s(1, 1, &[&[1]])).unwrap();
        let expected = cat.clone();
        remove_reducibles(&mut cat);
        assert_eq!(cat, expected);
    }

    #[test]
    fn test_empty_structure() {
        let mut cat = Catalog::new(2, 2);
        cat.add(s(1, 1, &[])).unwrap();
        cat.add(s(1, 0, &[&[1]])).unwrap();
        cat.add(s(1, 2, &[&[2]])).unwrap();
        cat.add(s(2, 2, &[&[2]])).unwrap();
        remove_reducibles(&mut cat);
        assert_eq!(cat.bucket(1, 0), &[s(1, 0, &[&[1]])]);
        assert_eq!(cat.bucket(1, 1), &[s(1, 1, &[])]);
        assert!(cat.bucket(1, 2).is_empty());
        assert_eq!(cat.bucket(2, 2), &[s(2, 2, &[&[2]])]);
    }

    #[test]
    fn test_width_isolation() {
        let mut cat = Catalog::new(2, 1);
        cat.add(s(1, 0, &[&[1]])).unwrap();
        cat.add(s(2, 1, &[&[1]])).unwrap();
        cat.add(s(1, 1, &[&[1]])).unwrap();
        remove_reducibles_in_width(&mut cat, 2);
        assert_eq!(cat.bucket(1, 1), &[s(1, 1, &[&[1]])]);
        assert_eq!(cat.bucket(2, 1), &[s(2, 1, &[&[1]])]);
        remove_reducibles_in_width(&mut cat, 1);
        assert!(cat.bucket(1, 1).is_empty());
        assert_eq!(cat.bucket(2, 1), &[s(2, 1, &[&[1]])]);
    }

    #[test]
    fn test_random() {
        for seed in 0..10 {
            let original = random_catalog(seed, 3, 4);
            let mut cat = original.clone();
            let before = stats(&cat);
            remove_reducibles(&mut cat);
            cat.check();
            let after = stats(&cat);
            assert!(after.nb_structures() < before.nb_structures());
            for w in 0..cat.nb_widths() {
                // The lowest non-empty bucket is untouched
                if let Some(gc) = (0..cat.nb_gate_counts()).find(|gc| before.counts[w][*gc] != 0) {
                    assert_eq!(cat.bucket(w, gc), original.bucket(w, gc));
                }
                for gc in 0..cat.nb_gate_counts() {
                    assert!(after.counts[w][gc] <= before.counts[w][gc]);
                    // Survivors keep their relative order
                    let mut it = original.bucket(w, gc).iter();
                    for s in cat.bucket(w, gc) {
                        assert!(it.any(|o| o == s));
                    }
                    // Exactly the structures reducible by a lower bucket of the input are removed
                    for s in original.bucket(w, gc) {
                        let reducible = (0..gc).any(|l| s.is_reducible(original.bucket(w, l)));
                        assert_eq!(!cat.bucket(w, gc).contains(s), reducible);
                    }
                }
            }

            // Widths are independent
            for w in 0..original.nb_widths() {
                let mut single = original.clone();
                remove_reducibles_in_width(&mut single, w);
                for gc in 0..original.nb_gate_counts() {
                    assert_eq!(single.bucket(w, gc), cat.bucket(w, gc));
                    for other in (0..original.nb_widths()).filter(|o| *o != w) {
                        assert_eq!(single.bucket(other, gc), original.bucket(other, gc));
                    }
                }
            }
        }
    }
}
