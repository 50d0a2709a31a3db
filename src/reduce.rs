//! Reduction of structure catalogs
//!
//! Two passes are available. [`remove_reducibles`] drops every structure that contains a
//! structure of the same width and strictly lower gate count, and [`remove_duplicates`]
//! collapses identical structures within each bucket.

mod dedup;
mod sweep;

pub use dedup::{remove_duplicates, remove_duplicates_in_bucket, remove_duplicates_in_width};
pub use sweep::{remove_reducibles, remove_reducibles_in_width};

use crate::Catalog;

/// Run the whole reduction: removal of reducible structures, then of duplicates
///
/// ```
/// # use excirc::{Catalog, Structure};
/// let mut catalog = Catalog::new(2, 1);
/// catalog.add(Structure::new(2, 0, vec![vec![1, 2]])).unwrap();
/// catalog.add(Structure::new(2, 1, vec![vec![0], vec![1, 2]])).unwrap();
/// catalog.add(Structure::new(2, 1, vec![vec![3]])).unwrap();
/// catalog.add(Structure::new(2, 1, vec![vec![3]])).unwrap();
/// excirc::reduce::reduce(&mut catalog);
/// assert_eq!(catalog.bucket(2, 1), &[Structure::new(2, 1, vec![vec![3]])]);
/// ```
pub fn reduce(catalog: &mut Catalog) {
    log::info!(
        "Reducing catalog with {} structures",
        catalog.nb_structures()
    );
    remove_reducibles(catalog);
    log::info!(
        "{} structures left after removing reducibles",
        catalog.nb_structures()
    );
    remove_duplicates(catalog);
    log::info!(
        "{} structures left after removing duplicates",
        catalog.nb_structures()
    );
}
