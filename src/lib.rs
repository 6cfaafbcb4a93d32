//! Rift of Realms - console RPG and number guessing game.
//!
//! The game rules live in plain modules that take an explicit random source,
//! so both binaries and the tests drive the same code.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod config;
pub mod console;
pub mod core;
pub mod guess;
pub mod items;
pub mod rpg;
pub mod save;
pub mod world;

pub use character::Player;
pub use combat::{Combat, CombatState, Enemy, PlayerAction};
pub use crate::core::{RandomSource, RngSource, ScriptedRandom};
