//! Compute bucket statistics
//!
//! ```
//! # use excirc::Catalog;
//! # let catalog = Catalog::new(3, 4);
//! use excirc::catalog::stats::stats;
//! let stats = stats(&catalog);
//!
//! // Check that the catalog is empty
//! assert_eq!(stats.nb_structures(), 0);
//!
//! // Show the statistics
//! println!("{}", stats);
//! ```

use std::fmt;

use crate::Catalog;

/// Number of structures in each bucket of a catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogStats {
    /// Maximum width
    pub max_width: usize,
    /// Maximum gate count
    pub max_gate_count: usize,
    /// Number of structures per bucket, indexed by width then gate count
    pub counts: Vec<Vec<usize>>,
}

impl CatalogStats {
    /// Total number of structures
    pub fn nb_structures(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Number of structures for a given width
    ///
    /// # Panics
    ///
    /// Panics if `width` is larger than `max_width`.
    pub fn nb_structures_with_width(&self, width: usize) -> usize {
        self.counts[width].iter().sum()
    }

    /// Number of non-empty buckets
    pub fn nb_nonempty_buckets(&self) -> usize {
        self.counts.iter().flatten().filter(|c| **c != 0).count()
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (w, row) in self.counts.iter().enumerate() {
            for (gc, nb) in row.iter().enumerate() {
                writeln!(f, "({}, {}): {}", w, gc, nb)?;
            }
        }
        writeln!(f, "Total: {}", self.nb_structures())?;
        fmt::Result::Ok(())
    }
}

/// Compute the statistics of the catalog
pub fn stats(c: &Catalog) -> CatalogStats {
    let mut counts = vec![vec![0; c.nb_gate_counts()]; c.nb_widths()];
    for (w, gc, bucket) in c.buckets() {
        counts[w][gc] = bucket.len();
    }
    CatalogStats {
        max_width: c.max_width(),
        max_gate_count: c.max_gate_count(),
        counts,
    }
}
