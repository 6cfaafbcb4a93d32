//! Player model, shared stat block and leveling.

pub mod player;
pub mod progression;
pub mod stats;

pub use player::*;
pub use progression::*;
pub use stats::*;
