//! World map, enemy templates and exploration.

pub mod bestiary;
pub mod data;
pub mod explore;

pub use data::*;
pub use explore::*;
