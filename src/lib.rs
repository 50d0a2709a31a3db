//! Reduction of circuit structure catalogs
//!
//! This crate curates catalogs of small circuit structures, as produced by exhaustive synthesis
//! runs. Structures that are mere extensions of a smaller structure already present in the catalog,
//! and exact duplicates, are removed so that only the interesting ones are kept.
//!
//! # Usage
//!
//! ```bash
//! # Show the number of structures in each bucket
//! excirc show raw_3_7.txt
//! # Remove reducible and duplicate structures
//! excirc reduce raw_3_7.txt -o reduced_3_7.txt
//! # Combine several corpora with the same bounds before reducing them
//! excirc reduce part1.txt part2.txt -o reduced.txt
//! ```
//!
//! Detailed logs are available through the `RUST_LOG` environment variable, for example
//! `RUST_LOG=debug` to see how many structures each bucket removes from the others.
//!
//! # Datastructures
//!
//! A [`Structure`] is a width, a gate count and an ordered list of literal rows.
//! Literals are plain integers: their meaning (target, control, polarity...) is left to the
//! generator, and only their equality and ordering matter here.
//!
//! A [`Catalog`] holds every structure in a dense grid of buckets indexed by width and gate count,
//! with bounds declared upfront. Empty buckets are legal.
//!
//! ```
//! # use excirc::{Catalog, Structure};
//! let mut catalog = Catalog::new(3, 2);
//! catalog.add(Structure::new(3, 1, vec![vec![0, 1]])).unwrap();
//! catalog.add(Structure::new(3, 2, vec![vec![2], vec![0, 1]])).unwrap();
//! catalog.add(Structure::new(3, 2, vec![vec![2], vec![1, 0]])).unwrap();
//! excirc::reduce::reduce(&mut catalog);
//! assert_eq!(catalog.nb_structures(), 2);
//! ```
//!
//! # Reduction
//!
//! A structure is reducible if the literal rows of a structure with the same width and a lower
//! gate count appear as a contiguous block in its own rows. Buckets are swept by increasing gate
//! count, each one filtering all the buckets above it. Duplicates are then removed, which leaves
//! every bucket sorted.

#![warn(missing_docs)]

pub mod catalog;
pub mod io;
pub mod reduce;

pub use catalog::{stats, Catalog, Mismatch, Structure, Subsumption};
