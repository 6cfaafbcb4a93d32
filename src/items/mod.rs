//! Item system: types, the factory catalog, equipment slots and inventory.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use equipment::*;
pub use inventory::*;
pub use types::*;
