use {
    crate::{analysis::AnalogError, domain::Signal, domain::Year},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

// ============================================================================
// SignalSeries: year -> ordered sub-annual observations
// ============================================================================

/// One named time series keyed by year.
/// Each value holds the sub-annual observations (months / overlapping seasons) for that year.
/// Ordered map: iteration is always year-ascending, which the ranking tie-break relies on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SignalSeries {
    pub name: String,
    pub values: BTreeMap<Year, Vec<f64>>,
}

impl SignalSeries {
    pub fn new(name: impl Into<String>, values: BTreeMap<Year, Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Observations for `year`, or a MissingYear error naming this series.
    pub fn observations(&self, year: Year) -> Result<&[f64], AnalogError> {
        self.values
            .get(&year)
            .map(Vec::as_slice)
            .ok_or_else(|| AnalogError::MissingYear {
                series: self.name.clone(),
                year,
            })
    }

    /// Sum of the year's observations (e.g. a season's total snowfall).
    pub fn total(&self, year: Year) -> Result<f64, AnalogError> {
        Ok(self.observations(year)?.iter().sum())
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.values.keys().copied()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.values.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.values.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The pre-loaded, read-only index data the analog ranking consumes.
#[derive(Debug, Clone, Default)]
pub struct SignalStore {
    pub oni: SignalSeries,
    pub pdo: SignalSeries,
}

impl SignalStore {
    pub fn new(oni: SignalSeries, pdo: SignalSeries) -> Self {
        Self { oni, pdo }
    }

    pub fn series(&self, signal: Signal) -> &SignalSeries {
        match signal {
            Signal::Oni => &self.oni,
            Signal::Pdo => &self.pdo,
        }
    }
}
