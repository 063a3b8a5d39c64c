//! Analog ranking configuration

/// Defaults for a single analog ranking call.
pub struct AnalogConfig {
    /// How many preceding years are concatenated into each comparison window.
    /// 0 = compare single years only.
    pub look_back: u32,
    /// Nominal floor of the candidate pool (first year with index data).
    pub start_year: i32,
    /// Each per-period difference is raised to this power before summing.
    /// 1.0 = Manhattan. Turn UP to punish one big miss harder than many small ones.
    pub distance_exponent: f64,
    /// How many analog years to return.
    pub count: usize,
}

pub const ANALOG: AnalogConfig = AnalogConfig {
    look_back: 0,
    start_year: 1964, // ONI + PDO records used here both start in 1964 (PDO goes further back)
    distance_exponent: 1.0,
    count: 5,
};
