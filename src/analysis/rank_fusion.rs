use {
    crate::{analysis::AnalogError, domain::Signal, domain::Year},
    itertools::Itertools,
    std::collections::BTreeMap,
};

/// Total distance of every candidate year to the target, for one signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalDistances {
    pub signal: Signal,
    /// `(year, total distance)` in candidate iteration order.
    /// That order is the tie-break when two years score the same.
    pub totals: Vec<(Year, f64)>,
}

/// 1-based rank of each year by ascending total distance.
/// Stable: equal distances keep their input order.
pub fn rank_by_distance(totals: &[(Year, f64)]) -> BTreeMap<Year, usize> {
    totals
        .iter()
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .enumerate()
        .map(|(position, &(year, _))| (year, position + 1))
        .collect()
}

/// Ranks each signal independently, then averages each year's ranks.
///
/// Distances on different scales (ONI vs PDO) are only compared through their ranks.
/// Output follows the first table's iteration order and is NOT sorted by score.
pub fn fuse_ranks(tables: &[SignalDistances]) -> Result<Vec<(Year, f64)>, AnalogError> {
    let Some(first) = tables.first() else {
        return Ok(Vec::new());
    };

    let ranked: Vec<(Signal, BTreeMap<Year, usize>)> = tables
        .iter()
        .map(|table| (table.signal, rank_by_distance(&table.totals)))
        .collect();

    first
        .totals
        .iter()
        .map(|&(year, _)| {
            let rank_sum = ranked
                .iter()
                .map(|(signal, ranks)| {
                    ranks
                        .get(&year)
                        .copied()
                        .ok_or_else(|| AnalogError::MissingYear {
                            series: signal.to_string(),
                            year,
                        })
                })
                .sum::<Result<usize, _>>()?;

            Ok((year, rank_sum as f64 / ranked.len() as f64))
        })
        .collect()
}
