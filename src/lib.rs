//! # lexdist
//!
//! Weighted Levenshtein distance over codepoints or words, with per-symbol
//! cost tables, parallel nearest-lexicon search and edit-weight estimation
//! from aligned corpora.
//!
//! ## Features
//!
//! - Generic distance engine over any [`Symbol`](symbol::Symbol) type
//! - Cost tables overriding insertion, deletion and substitution costs
//! - Unit-cost alignment that recovers the individual edits
//! - Exhaustive k-nearest search across a worker pool
//! - `editdist`, `closest_word` and `estimate_weights` command-line tools

pub mod cli;
pub mod cost;
pub mod error;
pub mod estimate;
pub mod levenshtein;
pub mod search;
pub mod symbol;
pub mod text;

pub mod prelude {
    pub use crate::cost::{CostDefaults, CostModel};
    pub use crate::error::{LexdistError, Result};
    pub use crate::estimate::{EditKey, WeightEstimator, WeightFormula};
    pub use crate::levenshtein::{align, distance, trace, Alignment, Backtrack, Edit, Operation};
    pub use crate::search::{find_closest, BoundedTopK, NearestNeighborSearch, Neighbor, SearchConfig};
    pub use crate::symbol::{Symbol, Word};
    pub use crate::text::{decode, encode, split_words};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
