//! Console front end for the RPG.

pub mod encounter;
pub mod render;
pub mod session;

pub use encounter::*;
pub use session::*;
