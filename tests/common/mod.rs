#![allow(dead_code)]

use snow_analog::{SignalSeries, SignalStore, Year};
use std::collections::BTreeMap;

pub const FIRST_YEAR: Year = 1964;
pub const LAST_YEAR: Year = 2022;

/// Deterministic pseudo-index values in [-1.1, 1.1], 12 per year.
pub fn synthetic_oni() -> SignalSeries {
    series("ONI", |year, month| {
        (((year * 37 + month * 11) % 23) as f64 - 11.0) / 10.0
    })
}

/// Deterministic pseudo-index values in [-1.8, 1.8], 12 per year.
pub fn synthetic_pdo() -> SignalSeries {
    series("PDO", |year, month| {
        (((year * 13 + month * 7) % 19) as f64 - 9.0) / 5.0
    })
}

pub fn synthetic_store() -> SignalStore {
    SignalStore::new(synthetic_oni(), synthetic_pdo())
}

/// Seasonal snowfall: five monthly totals per winter.
pub fn synthetic_snowfall(airport: &str) -> SignalSeries {
    SignalSeries::new(
        airport,
        (FIRST_YEAR..=LAST_YEAR)
            .map(|year| {
                let months = (0..5)
                    .map(|m| ((year * 7 + m * 5) % 13) as f64 * 0.75)
                    .collect();
                (year, months)
            })
            .collect(),
    )
}

pub fn store_from(oni: &[(Year, Vec<f64>)], pdo: &[(Year, Vec<f64>)]) -> SignalStore {
    SignalStore::new(
        SignalSeries::new("ONI", oni.iter().cloned().collect::<BTreeMap<_, _>>()),
        SignalSeries::new("PDO", pdo.iter().cloned().collect::<BTreeMap<_, _>>()),
    )
}

fn series(name: &str, value: impl Fn(Year, Year) -> f64) -> SignalSeries {
    SignalSeries::new(
        name,
        (FIRST_YEAR..=LAST_YEAR)
            .map(|year| (year, (0..12).map(|m| value(year, m)).collect()))
            .collect(),
    )
}
