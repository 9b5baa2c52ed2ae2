//! `tracing` subscriber setup shared by the binaries.

use tracing_subscriber::filter::LevelFilter;

/// Install a stderr fmt subscriber capped at `level`.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
