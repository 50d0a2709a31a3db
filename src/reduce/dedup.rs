use crate::{Catalog, Structure};

/// Sort a list of structures and remove identical ones
pub fn remove_duplicates_in_bucket(structures: &mut Vec<Structure>) {
    structures.sort_unstable();
    structures.dedup();
}

/// Remove identical structures from every bucket of a single width
pub fn remove_duplicates_in_width(catalog: &mut Catalog, width: usize) {
    for gate_count in 0..catalog.nb_gate_counts() {
        let bucket = catalog.bucket_mut(width, gate_count);
        let nb_before = bucket.len();
        remove_duplicates_in_bucket(bucket);
        if bucket.len() != nb_before {
            log::debug!(
                "({}, {}) deduplicated: {} -> {}",
                width,
                gate_count,
                nb_before,
                bucket.len()
            );
        }
    }
}

/// Remove identical structures from every bucket of the catalog
///
/// Each bucket is left sorted by increasing width, gate count and literal rows, so the
/// original order of the structures is not kept.
pub fn remove_duplicates(catalog: &mut Catalog) {
    for width in 0..catalog.nb_widths() {
        remove_duplicates_in_width(catalog, width);
    }
}
