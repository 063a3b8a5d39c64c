mod maths_utils;
mod perf;

pub use maths_utils::{mean, median, min_max_indices};
