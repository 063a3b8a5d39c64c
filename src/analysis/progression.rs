use crate::{analysis::AnalogError, domain::Year, models::SignalSeries};

/// Builds the comparison window for `year`.
///
/// `look_back == 0`: the year's own observations.
/// `look_back > 0`: observations of `[year - look_back, year]` concatenated oldest first.
///
/// Fails on the first year of the window missing from `series`.
pub fn progression(
    series: &SignalSeries,
    year: Year,
    look_back: u32,
) -> Result<Vec<f64>, AnalogError> {
    if look_back == 0 {
        return Ok(series.observations(year)?.to_vec());
    }

    let look_back = Year::try_from(look_back).unwrap_or(Year::MAX);
    let first = year.saturating_sub(look_back);
    let chunks = (first..=year)
        .map(|y| series.observations(y))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(chunks.concat())
}
