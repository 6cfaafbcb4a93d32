//! Command-line configuration and logging setup for both binaries.

use crate::build_info::LONG_VERSION;
use crate::core::constants::*;
use crate::save::SaveFormat;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rift of Realms: a menu-driven text RPG.
#[derive(Debug, Clone, Parser)]
#[command(name = "rift", version, long_version = LONG_VERSION)]
pub struct RpgArgs {
    /// Seed for the random source; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where "Save Game" writes and "Load Game" reads.
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    /// Save file layout.
    #[arg(long, value_enum, default_value_t = SaveFormat::Text)]
    pub format: SaveFormat,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl RpgArgs {
    pub fn color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

/// Guess the number the computer picked.
#[derive(Debug, Clone, Parser)]
#[command(name = "guess", version, long_version = LONG_VERSION)]
pub struct GuessArgs {
    /// Smallest possible secret.
    #[arg(long, default_value_t = GUESS_DEFAULT_MIN)]
    pub min: u32,

    /// Largest possible secret.
    #[arg(long, default_value_t = GUESS_DEFAULT_MAX)]
    pub max: u32,

    /// Guesses allowed per round.
    #[arg(long, default_value_t = GUESS_DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Seed for the random source; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colored output and screen clearing.
    #[arg(long)]
    pub no_color: bool,
}

impl GuessArgs {
    pub fn color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`), keeping game text on stdout uncluttered.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
