// logmask/src/logger.rs
//! Logger setup for the logmask binary.
//!
//! Logs go to stderr through `env_logger`, so stdout stays free for command
//! output. An explicit level overrides `RUST_LOG`; without one, `RUST_LOG`
//! applies and defaults to `warn`.
//! License: MIT OR Apache-2.0

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are no-ops, which keeps test binaries that share a process happy.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };

    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(true);

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized (explicit level: {:?}).", level);
    }
}

/// Maps the global `--quiet` / `--debug` flags to an explicit level, or
/// `None` to defer to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(true, false), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
