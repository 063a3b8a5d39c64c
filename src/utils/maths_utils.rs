use {
    argminmax::ArgMinMax,
    statrs::statistics::{Data, Median, Statistics},
};

/// Median of the values. None for an empty slice (statrs would give NaN).
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(Data::new(values.to_vec()).median())
}

/// Arithmetic mean. None for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Indices of the smallest and largest value. None for an empty slice.
#[inline]
pub fn min_max_indices(values: &[f64]) -> Option<(usize, usize)> {
    if values.is_empty() {
        return None;
    }
    Some(values.argminmax())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_min_max_indices() {
        assert_eq!(min_max_indices(&[80.0, 45.5, 120.0, 99.0]), Some((1, 2)));
        assert_eq!(min_max_indices(&[]), None);
    }
}
