// Domain types and value objects
mod season;
mod signal;

// Re-export commonly used types to the world
pub use season::{Year, season_label};
pub use signal::Signal;
