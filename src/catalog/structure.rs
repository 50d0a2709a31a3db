use std::fmt;

use itertools::Itertools;

/// A single circuit structure: a width, a gate count and an ordered list of literal rows
///
/// Structures compare lexicographically on width, then gate count, then literal rows.
/// Row order and the order of literals within a row are both significant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Structure {
    width: usize,
    gate_count: usize,
    rows: Vec<Vec<i32>>,
}

/// Reason why two structures cannot be compared for subsumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The structures have different widths
    Width,
    /// The candidate has a larger gate count than the structure it is compared against
    GateCount,
}

/// Outcome of a subsumption check between two structures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsumption {
    /// The literal rows of the smaller structure appear contiguously in the larger one
    Match,
    /// The structures are comparable, but the rows do not appear
    NoMatch,
    /// The structures cannot be compared
    Incomparable(Mismatch),
}

impl Subsumption {
    /// Returns true if the check found a match
    pub fn is_match(&self) -> bool {
        matches!(self, Subsumption::Match)
    }
}

impl Structure {
    /// Create a new structure
    pub fn new(width: usize, gate_count: usize, rows: Vec<Vec<i32>>) -> Self {
        Structure {
            width,
            gate_count,
            rows,
        }
    }

    /// Return the width of the structure
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the gate count of the structure
    pub fn gate_count(&self) -> usize {
        self.gate_count
    }

    /// Return the literal rows of the structure
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Check whether the literal rows of `other` appear as a contiguous block in `self`
    ///
    /// The structures must have the same width, and `other` may not have more gates
    /// than `self`; otherwise the result is [`Subsumption::Incomparable`].
    /// Empty rows in `other` are always contained.
    ///
    /// ```
    /// # use excirc::{Structure, Subsumption};
    /// let large = Structure::new(3, 2, vec![vec![0, 1], vec![2], vec![1, 0]]);
    /// let small = Structure::new(3, 1, vec![vec![2], vec![1, 0]]);
    /// assert_eq!(large.is_super(&small), Subsumption::Match);
    /// ```
    pub fn is_super(&self, other: &Structure) -> Subsumption {
        if other.width != self.width {
            return Subsumption::Incomparable(Mismatch::Width);
        }
        if other.gate_count > self.gate_count {
            return Subsumption::Incomparable(Mismatch::GateCount);
        }
        // windows(0) is not allowed
        if other.rows.is_empty() {
            return Subsumption::Match;
        }
        if self
            .rows
            .windows(other.rows.len())
            .any(|w| w == other.rows.as_slice())
        {
            Subsumption::Match
        } else {
            Subsumption::NoMatch
        }
    }

    /// Check whether the structure contains any of the candidates
    ///
    /// Candidates that cannot be compared to this structure, because of a different width or a
    /// larger gate count, are skipped.
    ///
    /// ```
    /// # use excirc::Structure;
    /// let large = Structure::new(2, 3, vec![vec![1], vec![0, 1], vec![1]]);
    /// let small = Structure::new(2, 1, vec![vec![0, 1]]);
    /// assert!(large.is_reducible(&[small.clone()]));
    /// assert!(!small.is_reducible(&[large]));
    /// ```
    pub fn is_reducible(&self, candidates: &[Structure]) -> bool {
        candidates.iter().any(|c| self.is_super(c).is_match())
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "c {} {}", self.width, self.gate_count)?;
        for row in &self.rows {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
