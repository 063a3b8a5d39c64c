// Analog ranking: progression -> distance -> per-signal rank -> fused order
pub mod analog_selector;
pub mod distance;
mod error;
pub mod progression;
pub mod rank_fusion;

pub use {
    analog_selector::{AnalogParams, AnalogScore, candidate_pool, get_analog, rank_analogs},
    distance::{distance_vector, total_distance},
    error::AnalogError,
    progression::progression,
    rank_fusion::{SignalDistances, fuse_ranks, rank_by_distance},
};
