//! Representation of circuit structures and of the bucketed catalog holding them

mod catalog;
pub mod stats;
mod structure;

pub use catalog::{Catalog, CatalogError};
pub use structure::{Mismatch, Structure, Subsumption};
