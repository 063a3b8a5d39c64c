use crate::config::DF;

/// Element-wise `|candidate[i] - target[i]|^exponent`.
///
/// The candidate is truncated to the target's length before pairing, so a longer
/// candidate silently loses its tail. A shorter candidate just yields a shorter vector.
pub fn distance_vector(candidate: &[f64], target: &[f64], exponent: f64) -> Vec<f64> {
    if DF.log_truncation && candidate.len() != target.len() {
        log::debug!(
            "Progression length mismatch: candidate {} vs target {}. Pairing first {} values.",
            candidate.len(),
            target.len(),
            candidate.len().min(target.len())
        );
    }

    candidate
        .iter()
        .take(target.len())
        .zip(target)
        .map(|(c, t)| (c - t).abs().powf(exponent))
        .collect()
}

/// Sum of the distance vector. Used for ranking.
#[inline]
pub fn total_distance(candidate: &[f64], target: &[f64], exponent: f64) -> f64 {
    distance_vector(candidate, target, exponent).iter().sum()
}
