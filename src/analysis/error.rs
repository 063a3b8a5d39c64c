use {
    crate::domain::Year,
    std::{error::Error, fmt},
};

/// Failures of the analog ranking core. Both abort the whole computation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalogError {
    /// A target, candidate or look-back year is absent from a series.
    MissingYear { series: String, year: Year },
    /// Candidate pool `[effective_start, target - 1]` is empty or inverted.
    InvalidRange { target: Year, effective_start: Year },
}

impl fmt::Display for AnalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            AnalogError::MissingYear { series, year } => {
                write!(f, "Year {} not found in {} series", year, series)
            }
            AnalogError::InvalidRange {
                target,
                effective_start,
            } => write!(
                f,
                "Invalid range: target year {} must be after the effective start year {}",
                target, effective_start
            ),
        }
    }
}

impl Error for AnalogError {}
