//! Accuracy back-test configuration

/// Default year range walked by the accuracy back-test.
pub struct BacktestDefaults {
    /// First winter (inclusive) to predict and score.
    pub first_year: i32,
    /// Exclusive upper bound. Latest season with a complete snowfall record.
    pub end_year: i32,
}

pub const BACKTEST: BacktestDefaults = BacktestDefaults {
    first_year: 2010,
    end_year: 2022,
};
