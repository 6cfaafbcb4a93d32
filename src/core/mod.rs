//! Shared tuning constants and the injectable random source.

pub mod constants;
pub mod rng;

pub use constants::*;
pub use rng::*;
