use clap::Parser;
use rift::config::{init_tracing, RpgArgs};
use rift::console::Console;
use rift::core::RngSource;
use rift::rpg::{create_player, RpgSession};
use rift::save::SaveManager;
use std::io;
use tracing::info;

fn main() -> io::Result<()> {
    let args = RpgArgs::parse();
    init_tracing();
    info!(seed = ?args.seed, save_path = %args.save_path.display(), "starting rift");

    let mut console = Console::stdio(args.color());
    let player = match create_player(&mut console) {
        Ok(player) => player,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(e) => return Err(e),
    };

    let saves = SaveManager::new(args.save_path.clone(), args.format);
    let rng = RngSource::from_seed_or_entropy(args.seed);
    let mut session = RpgSession::new(player, saves, rng);
    session.run(&mut console)
}
