//! Console front end for the number guessing game.

use super::logic::{GuessOutcome, NumberGuessGame};
use crate::console::{Console, Tone};
use crate::core::RandomSource;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Tally of a play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
}

/// Plays rounds until the player declines another or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut NumberGuessGame,
    rng: &mut impl RandomSource,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    match play_rounds(console, game, rng, &mut summary) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {}
        Err(e) => return Err(e),
    }
    info!(rounds = summary.rounds, wins = summary.wins, "guess session finished");
    console.say("")?;
    console.say("Thanks for playing! Goodbye!")?;
    Ok(summary)
}

fn play_rounds<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut NumberGuessGame,
    rng: &mut impl RandomSource,
    summary: &mut SessionSummary,
) -> io::Result<()> {
    loop {
        if play_round(console, game)? {
            summary.wins += 1;
        }
        summary.rounds += 1;

        if !ask_play_again(console)? {
            return Ok(());
        }
        game.reset(rng);
        console.clear_screen()?;
    }
}

/// Returns whether the player found the number.
fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut NumberGuessGame,
) -> io::Result<bool> {
    display_welcome(console, game)?;

    loop {
        console.say(format!("Attempts remaining: {}", game.remaining()))?;
        console.write("Enter your guess: ")?;
        let guess = read_guess(console, game)?;

        match game.process_guess(guess) {
            GuessOutcome::Correct { attempts } => {
                console.say("")?;
                console.say_styled("CONGRATULATIONS!", Tone::Good)?;
                console.say(format!("You guessed it in {attempts} attempts!"))?;
                return Ok(true);
            }
            GuessOutcome::TooLow => {
                console.say("Too low! Try a higher number.")?;
                console.say("")?;
            }
            GuessOutcome::TooHigh => {
                console.say("Too high! Try a lower number.")?;
                console.say("")?;
            }
        }

        if game.is_over() {
            console.say("")?;
            console.say_styled("GAME OVER!", Tone::Bad)?;
            console.say(format!("The number was: {}", game.secret()))?;
            console.say("Better luck next time!")?;
            return Ok(false);
        }
    }
}

fn display_welcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &NumberGuessGame,
) -> io::Result<()> {
    let rule = "========================================";
    console.say(rule)?;
    console.say_styled("    Welcome to GUESS THE NUMBER!", Tone::Title)?;
    console.say(rule)?;
    console.say(format!(
        "I'm thinking of a number between {}-{}",
        game.min(),
        game.max()
    ))?;
    console.say(format!(
        "You have {} attempts to guess it!",
        game.max_attempts()
    ))?;
    console.say(rule)?;
    console.say("")
}

/// Re-prompts until the line holds an in-range number.
fn read_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &NumberGuessGame,
) -> io::Result<u32> {
    loop {
        match console.read_number()? {
            None => console.write("Invalid input! Please enter a number: ")?,
            Some(raw) => match game.check_guess(raw) {
                Ok(guess) => return Ok(guess),
                Err(_) => console.write(format!(
                    "Please enter a number between {} and {}: ",
                    game.min(),
                    game.max()
                ))?,
            },
        }
    }
}

fn ask_play_again<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<bool> {
    console.say("")?;
    let response = console.prompt_line("Would you like to play again? (y/n): ")?;
    let answer = response.split_whitespace().next().unwrap_or("");
    Ok(matches!(answer, "y" | "Y" | "yes" | "Yes"))
}
