//! Dataset locations, relative to the data directory passed on the command line.

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    /// ONI seasonal values, keyed by year
    pub oni_path: &'static str,
    /// PDO monthly values, keyed by year
    pub pdo_path: &'static str,
    /// Directory holding one snowfall file per airport
    pub snowfall_directory: &'static str,
    /// Prefix for snowfall files (`snowfall_iad.json`)
    pub snowfall_prefix: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    oni_path: "oceanic_nino_index/oni.json",
    pdo_path: "teleconnections/pdo.json",
    snowfall_directory: "snowfall_data",
    snowfall_prefix: "snowfall",
};

/// Generate the airport-specific snowfall filename.
/// Example: "snowfall_iad.json"
pub fn snowfall_filename(airport: &str) -> String {
    format!(
        "{}_{}.json",
        PERSISTENCE.snowfall_prefix,
        airport.to_lowercase()
    )
}
