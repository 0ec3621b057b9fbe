//! Generalized Levenshtein distance for lexdist.
//!
//! The weighted distance drives nearest-neighbour search, while the unit-cost
//! alignment recovers the individual edits used to estimate weights.

pub mod alignment;
pub mod distance;

pub use alignment::*;
pub use distance::*;
