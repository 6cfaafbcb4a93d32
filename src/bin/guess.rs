use clap::Parser;
use rift::config::{init_tracing, GuessArgs};
use rift::console::Console;
use rift::core::RngSource;
use rift::guess::{run_session, NumberGuessGame};
use std::io;
use tracing::error;

fn main() -> io::Result<()> {
    let args = GuessArgs::parse();
    init_tracing();

    let mut rng = RngSource::from_seed_or_entropy(args.seed);
    let mut game = match NumberGuessGame::new(args.min, args.max, args.attempts, &mut rng) {
        Ok(game) => game,
        Err(e) => {
            error!(error = %e, "refusing to start");
            eprintln!("guess: {e}");
            std::process::exit(2);
        }
    };

    let mut console = Console::stdio(args.color());
    run_session(&mut console, &mut game, &mut rng)?;
    Ok(())
}
