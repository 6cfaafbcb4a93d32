//! Turn-based combat: enemy model, state machine and rewards.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
