use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The independent climate signals every candidate year is compared on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Signal {
    /// Oceanic Niño Index
    #[strum(serialize = "ONI")]
    Oni,
    /// Pacific Decadal Oscillation
    #[strum(serialize = "PDO")]
    Pdo,
}
