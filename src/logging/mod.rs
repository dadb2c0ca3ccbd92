//! CLI verbosity to severity-threshold mapping.
//!
//! The crawler CLI counts `-v` flags upward, while the severity scale runs the
//! other way (lower threshold = more verbose, 50 = errors only). The exact
//! arithmetic below, double clamp included, is load-bearing: callers compare
//! the returned threshold against fixed severity constants.

use log::LevelFilter;

/// Threshold returned in quiet mode; above every real severity.
pub const QUIET_THRESHOLD: i64 = 100;

/// Maps a CLI verbosity count to a numeric severity threshold.
///
/// Quiet mode wins over any `level`. Otherwise the level is scaled by ten,
/// clamped to 50, inverted around 60, and clamped down to 50 again, so levels
/// 0 and 1 both land on 50 and each further `-v` lowers the threshold by ten
/// until it bottoms out at 10. Any integer is accepted; out-of-range input
/// flows through the same arithmetic.
pub fn resolve_log_level(level: i64, quiet_mode: bool) -> i64 {
    if quiet_mode {
        return QUIET_THRESHOLD;
    }

    let mut input_level = level.saturating_mul(10);

    if input_level > 50 {
        input_level = 50;
    }

    input_level = 60i64.saturating_sub(input_level);

    if input_level >= 50 {
        input_level = 50;
    }

    input_level
}

/// Adapts a numeric threshold to the `log` facade.
///
/// Thresholds at or above 60 (including [`QUIET_THRESHOLD`]) disable logging
/// entirely; below that the bands follow the classic severity ladder.
pub fn level_filter(threshold: i64) -> LevelFilter {
    match threshold {
        t if t >= 60 => LevelFilter::Off,
        t if t >= 50 => LevelFilter::Error,
        t if t >= 40 => LevelFilter::Warn,
        t if t >= 30 => LevelFilter::Info,
        t if t >= 20 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
