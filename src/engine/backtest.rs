//! Accuracy back-test.
//!
//! Enabled via the `backtest` Cargo feature (on by default). Entry point: [`check_accuracy`].
//!
//! # Approach
//! Every winter in `[first_year, end_year)` is predicted as if it were the upcoming one:
//!
//! 1. [`get_analog`] ranks all years before it (the candidate pool never reaches the
//!    target year, so the prediction never sees its own outcome).
//! 2. The median analog snowfall is the prediction.
//! 3. Accuracy = predicted / actual * 100. 100% is a perfect call, 50% means half the
//!    snow that fell was predicted.
//!
//! Years are independent pure computations over a read-only store, so they are
//! evaluated with rayon and re-assembled in year order.

use {
    crate::{
        analysis::{AnalogParams, get_analog},
        config::{BACKTEST, DF},
        domain::{Year, season_label},
        engine::analog_snowfalls,
        models::{AccuracyReport, SeasonAccuracy, SignalSeries, SignalStore},
        utils::{mean, min_max_indices},
    },
    anyhow::{Context, Result, bail},
    rayon::prelude::*,
    serde::{Deserialize, Serialize},
};

/// Configuration for a single back-test run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// First winter evaluated (inclusive).
    pub first_year: Year,
    /// Exclusive upper bound.
    pub end_year: Year,
    /// Analog search parameters applied to every evaluated winter.
    pub analog: AnalogParams,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            first_year: BACKTEST.first_year,
            end_year: BACKTEST.end_year,
            analog: AnalogParams::default(),
        }
    }
}

/// Predict every winter in the configured range and score it against what fell.
pub fn check_accuracy(
    store: &SignalStore,
    snowfall: &SignalSeries,
    airport: &str,
    config: &BacktestConfig,
) -> Result<AccuracyReport> {
    if config.first_year >= config.end_year {
        bail!(
            "Empty back-test range: first year {} must be before end year {}",
            config.first_year,
            config.end_year
        );
    }

    let airport = airport.to_uppercase();

    log::info!(
        "[backtest] {} | seasons {}..{} | look_back={} | start_year={} | exp={} | count={}",
        airport,
        season_label(config.first_year),
        season_label(config.end_year - 1),
        config.analog.look_back,
        config.analog.start_year,
        config.analog.distance_exponent,
        config.analog.count,
    );

    let seasons: Vec<SeasonAccuracy> = crate::trace_time!("check_accuracy", 100_000, {
        (config.first_year..config.end_year)
            .into_par_iter()
            .map(|year| score_season(store, snowfall, &airport, year, &config.analog))
            .collect::<Result<Vec<_>>>()
    })?;

    let defined: Vec<(Year, f64)> = seasons
        .iter()
        .filter_map(|s| s.accuracy_pct.map(|pct| (s.year, pct)))
        .collect();
    let ratios: Vec<f64> = defined.iter().map(|&(_, pct)| pct).collect();

    let mean_accuracy_pct = mean(&ratios);
    let (lowest, highest) = match min_max_indices(&ratios) {
        Some((min_idx, max_idx)) => (Some(defined[min_idx].0), Some(defined[max_idx].0)),
        None => (None, None),
    };

    let report = AccuracyReport {
        airport: airport.clone(),
        first_year: config.first_year,
        end_year: config.end_year,
        seasons,
        mean_accuracy_pct,
        lowest,
        highest,
    };

    log::info!(
        "[backtest] {} COMPLETE | seasons={} | scored={} | mean={}",
        airport,
        report.seasons.len(),
        ratios.len(),
        mean_accuracy_pct
            .map(|m| format!("{:.1}%", m))
            .unwrap_or_else(|| "n/a".to_string()),
    );

    Ok(report)
}

fn score_season(
    store: &SignalStore,
    snowfall: &SignalSeries,
    airport: &str,
    year: Year,
    params: &AnalogParams,
) -> Result<SeasonAccuracy> {
    let analog_years = get_analog(store, year, params)
        .with_context(|| format!("Analog search failed for {}", season_label(year)))?;

    let prediction = analog_snowfalls(&analog_years, airport, snowfall)?;

    let actual = snowfall
        .total(year)
        .with_context(|| format!("No observed snowfall for {}", season_label(year)))?;

    let accuracy_pct = if actual > 0.0 {
        Some(prediction.median / actual * 100.0)
    } else {
        log::warn!(
            "⚠ {} {}: no snow fell, accuracy undefined. Excluded from the mean.",
            airport,
            season_label(year)
        );
        None
    };

    if DF.log_backtest_years {
        log::debug!(
            "[backtest] {} {} analogs={:?} predicted={:.2} actual={:.2}",
            airport,
            season_label(year),
            analog_years,
            prediction.median,
            actual
        );
    }

    Ok(SeasonAccuracy {
        year,
        season: season_label(year),
        analog_years,
        predicted: prediction.median,
        actual,
        accuracy_pct,
    })
}
