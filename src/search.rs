//! Nearest-neighbour search over a lexicon under weighted edit distance.
//!
//! The search is exhaustive: every lexicon entry within the optional length
//! bound is scored, in parallel, into a shared [`BoundedTopK`].

pub mod config;
pub mod nearest;
pub mod topk;

pub use config::*;
pub use nearest::*;
pub use topk::*;
