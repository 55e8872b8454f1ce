#![cfg(feature = "std")]

use std::env;
use log::{self, Level, LevelFilter, Metadata, Record};

const CRATE_TARGET: &str = "gridfleet";

/// Writes records to stderr. Records from this crate follow the configured
/// level; records from dependencies are capped at `warn`.
struct StderrLogger;

/// Whether a record from `target` at `level` passes under `max`.
fn allowed(target: &str, level: Level, max: LevelFilter) -> bool {
    let own = target == CRATE_TARGET
        || target
            .strip_prefix(CRATE_TARGET)
            .is_some_and(|rest| rest.starts_with("::"));
    if own {
        level <= max
    } else {
        level <= max.min(LevelFilter::Warn)
    }
}

/// Module path relative to the crate, e.g. `board` for `gridfleet::board`.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_TARGET)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        allowed(metadata.target(), metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{:<5} {}: {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `info` for anything unrecognized.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at `level`. Later calls only change the level.
pub fn init_logging_at(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Initialize logging with a level taken from the `GRIDFLEET_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_at(parse_level(env::var("GRIDFLEET_LOG").ok().as_deref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("OFF")), LevelFilter::Off);
    }

    #[test]
    fn dependencies_capped_at_warn() {
        assert!(allowed("gridfleet::board", Level::Debug, LevelFilter::Debug));
        assert!(allowed("gridfleet", Level::Trace, LevelFilter::Trace));
        assert!(!allowed("gridfleet::game", Level::Debug, LevelFilter::Info));
        assert!(!allowed("clap::parser", Level::Info, LevelFilter::Trace));
        assert!(allowed("clap::parser", Level::Warn, LevelFilter::Trace));
        assert!(!allowed("gridfleetish", Level::Info, LevelFilter::Trace));
        assert!(!allowed("clap", Level::Warn, LevelFilter::Error));
    }

    #[test]
    fn targets_shortened_within_crate() {
        assert_eq!(short_target("gridfleet::board"), "board");
        assert_eq!(short_target("gridfleet"), "gridfleet");
        assert_eq!(short_target("rand::rngs"), "rand::rngs");
    }
}
