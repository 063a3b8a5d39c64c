// Prediction and back-testing on top of the analog ranking
#[cfg(feature = "backtest")]
pub mod backtest;
pub mod prediction;

#[cfg(feature = "backtest")]
pub use backtest::{BacktestConfig, check_accuracy};
pub use prediction::{analog_snowfalls, predict};
