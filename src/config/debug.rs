//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Dump the full fused ranking for every analog call.
    pub log_rankings: bool,

    /// Report candidate/target progression length mismatches (candidate gets truncated).
    pub log_truncation: bool,

    /// Per-season lines while the back-test runs.
    pub log_backtest_years: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: false,
    log_rankings: false,
    log_truncation: true,
    log_backtest_years: false,
};

/// (everything else, this crate) log levels for a debug or release build.
/// RUST_LOG overrides both at startup.
pub fn log_levels(debug_build: bool) -> (log::LevelFilter, log::LevelFilter) {
    if debug_build {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}
