use {
    crate::domain::Year,
    serde::{Deserialize, Serialize},
};

/// Back-test result for a single winter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeasonAccuracy {
    pub year: Year,
    pub season: String,
    pub analog_years: Vec<Year>,
    pub predicted: f64,
    pub actual: f64,
    /// predicted / actual * 100. None when nothing fell (ratio undefined).
    pub accuracy_pct: Option<f64>,
}

/// Summary statistics for one completed accuracy back-test.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub airport: String,
    pub first_year: Year,
    pub end_year: Year,
    pub seasons: Vec<SeasonAccuracy>,
    /// Mean over seasons with a defined accuracy. None if there are none.
    pub mean_accuracy_pct: Option<f64>,
    /// Season with the lowest predicted / actual ratio
    pub lowest: Option<Year>,
    /// Season with the highest predicted / actual ratio
    pub highest: Option<Year>,
}
