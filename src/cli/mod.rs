//! Command Line Interface for the lexdist tools.

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
