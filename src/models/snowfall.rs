use {
    crate::domain::Year,
    serde::{Deserialize, Serialize},
};

/// One analog winter and how much snow fell at the airport that season.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalogSeason {
    pub year: Year,
    /// "2010-11" style label
    pub season: String,
    pub snowfall_total: f64,
}

/// Snowfall outcome of a set of analog years at one airport.
/// `median` of the season totals is the prediction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalogSnowfall {
    pub airport: String,
    /// Seasons in analog order (most similar first)
    pub season_snowfalls: Vec<AnalogSeason>,
    pub median: f64,
}
