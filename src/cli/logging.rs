//! Logger setup shared by the binaries.

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Map a verbosity level to a log filter.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    }
}

/// Initialise stderr logging. `RUST_LOG`, when set, takes precedence.
pub fn init(verbosity: u8) {
    Builder::new()
        .filter_level(level_filter(verbosity))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
