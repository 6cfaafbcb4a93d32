//! Guess-the-number: game rules and console shell.

pub mod logic;
pub mod shell;

pub use logic::*;
pub use shell::*;
