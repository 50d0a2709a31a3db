use core::fmt;

use itertools::iproduct;
use thiserror::Error;

use crate::catalog::structure::Structure;

/// Errors raised when the catalog bounds are violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A structure does not fit in the declared bounds
    #[error(
        "structure ({width}, {gate_count}) is outside the catalog bounds ({max_width}, {max_gate_count})"
    )]
    OutOfBounds {
        /// Width of the structure
        width: usize,
        /// Gate count of the structure
        gate_count: usize,
        /// Maximum width of the catalog
        max_width: usize,
        /// Maximum gate count of the catalog
        max_gate_count: usize,
    },
    /// The bucket grid for these bounds is too large to be represented
    #[error("catalog bounds ({max_width}, {max_gate_count}) are too large")]
    TooLarge {
        /// Maximum width requested
        max_width: usize,
        /// Maximum gate count requested
        max_gate_count: usize,
    },
    /// Two catalogs with different bounds were joined
    #[error("cannot join catalogs with bounds ({0}, {1}) and ({2}, {3})")]
    BoundsMismatch(usize, usize, usize, usize),
}

/// Collection of structures, bucketed by width and gate count
///
/// There is one bucket for every pair in `[0, max_width] x [0, max_gate_count]`, stored densely.
/// Every structure in a bucket has exactly the width and gate count of the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    max_width: usize,
    max_gate_count: usize,
    buckets: Vec<Vec<Structure>>,
}

impl Catalog {
    /// Create a new catalog with empty buckets
    ///
    /// Panics if the bucket grid cannot be allocated; see [`Catalog::try_new`].
    pub fn new(max_width: usize, max_gate_count: usize) -> Self {
        match Self::try_new(max_width, max_gate_count) {
            Ok(c) => c,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a new catalog with empty buckets, failing if the bounds are too large
    pub fn try_new(max_width: usize, max_gate_count: usize) -> Result<Self, CatalogError> {
        let too_large = CatalogError::TooLarge {
            max_width,
            max_gate_count,
        };
        let nb_buckets = max_width
            .checked_add(1)
            .zip(max_gate_count.checked_add(1))
            .and_then(|(w, gc)| w.checked_mul(gc))
            .ok_or_else(|| too_large.clone())?;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(nb_buckets)
            .map_err(|_| too_large)?;
        buckets.resize_with(nb_buckets, Vec::new);
        Ok(Catalog {
            max_width,
            max_gate_count,
            buckets,
        })
    }

    /// Return the maximum width
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Return the maximum gate count
    pub fn max_gate_count(&self) -> usize {
        self.max_gate_count
    }

    /// Return the number of widths, including width 0
    pub fn nb_widths(&self) -> usize {
        self.max_width + 1
    }

    /// Return the number of gate counts, including gate count 0
    pub fn nb_gate_counts(&self) -> usize {
        self.max_gate_count + 1
    }

    /// Return the total number of structures
    pub fn nb_structures(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    fn index(&self, width: usize, gate_count: usize) -> usize {
        assert!(width <= self.max_width, "Width {width} out of bounds");
        assert!(
            gate_count <= self.max_gate_count,
            "Gate count {gate_count} out of bounds"
        );
        width * self.nb_gate_counts() + gate_count
    }

    /// Get the bucket for a given width and gate count
    pub fn bucket(&self, width: usize, gate_count: usize) -> &[Structure] {
        &self.buckets[self.index(width, gate_count)]
    }

    /// Get the bucket for a given width and gate count, for in-place reduction
    pub(crate) fn bucket_mut(&mut self, width: usize, gate_count: usize) -> &mut Vec<Structure> {
        let i = self.index(width, gate_count);
        &mut self.buckets[i]
    }

    /// Add a structure to the bucket matching its width and gate count
    pub fn add(&mut self, structure: Structure) -> Result<(), CatalogError> {
        if structure.width() > self.max_width || structure.gate_count() > self.max_gate_count {
            return Err(CatalogError::OutOfBounds {
                width: structure.width(),
                gate_count: structure.gate_count(),
                max_width: self.max_width,
                max_gate_count: self.max_gate_count,
            });
        }
        self.bucket_mut(structure.width(), structure.gate_count())
            .push(structure);
        Ok(())
    }

    /// Append all structures of another catalog with the same bounds, bucket by bucket
    pub fn join(&mut self, other: Catalog) -> Result<(), CatalogError> {
        if (self.max_width, self.max_gate_count) != (other.max_width, other.max_gate_count) {
            return Err(CatalogError::BoundsMismatch(
                self.max_width,
                self.max_gate_count,
                other.max_width,
                other.max_gate_count,
            ));
        }
        for (b, o) in self.buckets.iter_mut().zip(other.buckets) {
            b.extend(o);
        }
        Ok(())
    }

    /// Iterate over all buckets by increasing width, then increasing gate count
    pub fn buckets(&self) -> impl Iterator<Item = (usize, usize, &[Structure])> + '_ {
        iproduct!(0..self.nb_widths(), 0..self.nb_gate_counts())
            .map(move |(w, gc)| (w, gc, self.bucket(w, gc)))
    }

    /// Iterate over all structures, in bucket order
    pub fn structures(&self) -> impl Iterator<Item = &Structure> + '_ {
        self.buckets.iter().flatten()
    }

    /// Check consistency of the datastructure
    pub fn check(&self) {
        assert_eq!(self.buckets.len(), self.nb_widths() * self.nb_gate_counts());
        for (w, gc, bucket) in self.buckets() {
            for s in bucket {
                assert_eq!(s.width(), w, "Structure stored in the wrong width bucket");
                assert_eq!(
                    s.gate_count(),
                    gc,
                    "Structure stored in the wrong gate count bucket"
                );
            }
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "h {} {}", self.max_width, self.max_gate_count)?;
        writeln!(f)?;
        for s in self.structures() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
