use {
    crate::{
        analysis::{
            AnalogError, SignalDistances, fuse_ranks, progression::progression,
            total_distance,
        },
        config::{ANALOG, DF},
        domain::{Signal, Year},
        models::{SignalSeries, SignalStore},
    },
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    std::ops::RangeInclusive,
    strum::IntoEnumIterator,
};

/// Parameters of one analog ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalogParams {
    /// Preceding years concatenated into every comparison window.
    pub look_back: u32,
    /// Nominal floor of the candidate pool. Shifted up by `look_back`.
    pub start_year: Year,
    /// Power applied to every per-period difference.
    pub distance_exponent: f64,
    /// Maximum number of analog years returned.
    pub count: usize,
}

impl Default for AnalogParams {
    fn default() -> Self {
        Self {
            look_back: ANALOG.look_back,
            start_year: ANALOG.start_year,
            distance_exponent: ANALOG.distance_exponent,
            count: ANALOG.count,
        }
    }
}

/// A candidate year and its fused rank score (lower = more similar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalogScore {
    pub year: Year,
    pub fused_score: f64,
}

/// Candidate years for `target`: `[start_year + look_back, target - 1]`.
///
/// The floor moves up by `look_back` so the earliest candidates still have
/// `look_back` prior years to build their window from.
pub fn candidate_pool(
    target: Year,
    params: &AnalogParams,
) -> Result<RangeInclusive<Year>, AnalogError> {
    // A floor past Year::MAX leaves no candidate below any target
    let effective_start = Year::try_from(params.look_back)
        .ok()
        .and_then(|look_back| params.start_year.checked_add(look_back))
        .unwrap_or(Year::MAX);
    if target <= effective_start {
        return Err(AnalogError::InvalidRange {
            target,
            effective_start,
        });
    }
    Ok(effective_start..=target - 1)
}

/// Every candidate year ordered by fused score, most similar first.
/// Equal scores keep year-ascending order.
pub fn rank_analogs(
    store: &SignalStore,
    target: Year,
    params: &AnalogParams,
) -> Result<Vec<AnalogScore>, AnalogError> {
    let pool = candidate_pool(target, params)?;

    let tables = Signal::iter()
        .map(|signal| score_signal(store.series(signal), signal, target, pool.clone(), params))
        .collect::<Result<Vec<_>, _>>()?;

    let ranking: Vec<AnalogScore> = fuse_ranks(&tables)?
        .into_iter()
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(year, fused_score)| AnalogScore { year, fused_score })
        .collect();

    if DF.log_rankings {
        log::debug!(
            "Analog ranking for {} (look_back={}, pool={:?}, exp={}): {}",
            target,
            params.look_back,
            pool,
            params.distance_exponent,
            ranking
                .iter()
                .map(|s| format!("{}:{:.1}", s.year, s.fused_score))
                .join(", ")
        );
    }

    Ok(ranking)
}

/// The `params.count` years most similar to `target`, most similar first.
/// Fewer are returned only when the candidate pool itself is smaller.
pub fn get_analog(
    store: &SignalStore,
    target: Year,
    params: &AnalogParams,
) -> Result<Vec<Year>, AnalogError> {
    Ok(rank_analogs(store, target, params)?
        .into_iter()
        .take(params.count)
        .map(|score| score.year)
        .collect())
}

/// Total distance of every pool year to the target, for one signal.
fn score_signal(
    series: &SignalSeries,
    signal: Signal,
    target: Year,
    pool: RangeInclusive<Year>,
    params: &AnalogParams,
) -> Result<SignalDistances, AnalogError> {
    let target_progression = progression(series, target, params.look_back)?;

    let totals = pool
        .map(|year| {
            let candidate = progression(series, year, params.look_back)?;
            let total = total_distance(&candidate, &target_progression, params.distance_exponent);
            Ok((year, total))
        })
        .collect::<Result<Vec<_>, AnalogError>>()?;

    Ok(SignalDistances { signal, totals })
}
