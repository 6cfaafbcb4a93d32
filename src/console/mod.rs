//! Console input and colored output.

pub mod input;
pub mod style;

pub use input::*;
pub use style::*;
