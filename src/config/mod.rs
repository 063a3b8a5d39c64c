//! Configuration module for the snow-analog application.

// Can all be private now because we have a public re-export.
mod analysis;
mod backtest;
mod debug;
mod persistence;

// Re-export commonly used items
pub use analysis::{ANALOG, AnalogConfig};
pub use backtest::{BACKTEST, BacktestDefaults};
pub use debug::{DF, LogFlags, log_levels};
pub use persistence::{PERSISTENCE, PersistenceConfig, snowfall_filename};

/// Master switch for the `trace_time!` macro.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
