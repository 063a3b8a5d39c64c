// Data models and structures
pub mod accuracy;
pub mod signal_series;
pub mod snowfall;

// Re-export commonly used types
pub use accuracy::{AccuracyReport, SeasonAccuracy};
pub use signal_series::{SignalSeries, SignalStore};
pub use snowfall::AnalogSnowfall;
