use {
    crate::{
        analysis::{AnalogParams, get_analog},
        domain::{Year, season_label},
        models::{AnalogSnowfall, SignalSeries, SignalStore, snowfall::AnalogSeason},
        utils::median,
    },
    anyhow::{Context, Result, bail},
};

/// Looks up each analog winter's total snowfall at `airport` and takes the median as
/// the prediction. Seasons keep the analog order (most similar first).
pub fn analog_snowfalls(
    analog_years: &[Year],
    airport: &str,
    snowfall: &SignalSeries,
) -> Result<AnalogSnowfall> {
    let season_snowfalls = analog_years
        .iter()
        .map(|&year| {
            let snowfall_total = snowfall.total(year).with_context(|| {
                format!("No snowfall record for analog season {}", season_label(year))
            })?;
            Ok(AnalogSeason {
                year,
                season: season_label(year),
                snowfall_total,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let totals: Vec<f64> = season_snowfalls.iter().map(|s| s.snowfall_total).collect();
    let Some(median) = median(&totals) else {
        bail!("No analog years to predict {} snowfall from", airport.to_uppercase());
    };

    Ok(AnalogSnowfall {
        airport: airport.to_uppercase(),
        season_snowfalls,
        median,
    })
}

/// Analog search for `target` followed by the snowfall lookup.
pub fn predict(
    store: &SignalStore,
    snowfall: &SignalSeries,
    airport: &str,
    target: Year,
    params: &AnalogParams,
) -> Result<AnalogSnowfall> {
    let analog_years = get_analog(store, target, params)
        .with_context(|| format!("Analog search failed for {}", target))?;

    log::info!("Analogs for {}: {:?}", season_label(target), analog_years);

    analog_snowfalls(&analog_years, airport, snowfall)
}
