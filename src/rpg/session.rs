//! Main menu and the town screens around it.

use super::encounter::{prompt_item_choice, run_encounter};
use super::render;
use crate::character::Player;
use crate::console::{Console, Tone};
use crate::core::constants::*;
use crate::core::RandomSource;
use crate::items::catalog;
use crate::save::{SaveError, SaveManager};
use crate::world::{explore, get_all_locations, ExploreOutcome, Location};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Greets the user and asks for a hero name. An empty answer keeps the
/// default name.
pub fn create_player<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Player> {
    console.say("")?;
    console.say_styled("Welcome to Rift of Realms!", Tone::Title)?;
    let name = console.prompt_line("Enter your hero's name (press Enter for 'Hero'): ")?;
    let name = name.trim();
    Ok(if name.is_empty() {
        Player::default()
    } else {
        Player::new(name)
    })
}

/// Everything one play session owns: the hero, the map, the save slot and
/// the random source.
pub struct RpgSession<S> {
    pub player: Player,
    world: Vec<Location>,
    saves: SaveManager,
    rng: S,
}

impl<S: RandomSource> RpgSession<S> {
    pub fn new(player: Player, saves: SaveManager, rng: S) -> Self {
        Self {
            player,
            world: get_all_locations(),
            saves,
            rng,
        }
    }

    /// Runs the main menu until the player quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        match self.main_menu(console) {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("console input closed, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            console.say("")?;
            console.say_styled("===== Rift of Realms: Text RPG =====", Tone::Title)?;
            render::show_player(console, &self.player)?;
            console.say("")?;
            console.say("Choose an action:")?;
            console.say("  1) Explore")?;
            console.say("  2) Shop")?;
            console.say("  3) Inventory/Equip")?;
            console.say("  4) Save Game")?;
            console.say("  5) Load Game")?;
            console.say(format!("  6) Rest at Inn (${INN_PRICE})"))?;
            console.say("  7) Quit")?;

            match console.prompt_number("> ")? {
                Some(1) => self.explore_menu(console)?,
                Some(2) => self.shop(console)?,
                Some(3) => self.inventory_menu(console)?,
                Some(4) => self.save(console)?,
                Some(5) => self.load(console)?,
                Some(6) => self.rest(console)?,
                Some(7) => {
                    console.say("Goodbye, adventurer!")?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn explore_menu<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say("Choose a location:")?;
        for (i, location) in self.world.iter().enumerate() {
            console.say(format!("  [{}] {}", i + 1, location.name))?;
        }
        console.say("  [0] Cancel")?;
        let Some(choice) = console.prompt_number("> ")? else {
            return Ok(());
        };
        let Some(location) = usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|index| self.world.get(index))
        else {
            return Ok(());
        };

        console.say("")?;
        console.say_styled(&format!("Exploring {}...", location.name), Tone::Travel)?;
        match explore(&mut self.player, location, &mut self.rng) {
            ExploreOutcome::Encounter(enemy) => {
                run_encounter(console, &mut self.player, enemy, &mut self.rng)?;
            }
            ExploreOutcome::FoundGold(amount) => console.say_styled(
                &format!("You found a pouch of coins: ${amount}!"),
                Tone::Reward,
            )?,
            ExploreOutcome::FoundItem(item) => console.say_styled(
                &format!("You discovered an item: {}!", item.name),
                Tone::Reward,
            )?,
            ExploreOutcome::Rested { .. } => console.say(format!(
                "It's quiet... You take a short rest and recover {EVENT_REST_HEAL} HP."
            ))?,
        }
        Ok(())
    }

    fn shop<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        let stock = catalog::shop_stock();
        loop {
            console.say("")?;
            let header = console.paint("== Shop ==", Tone::Shop);
            console.say(format!("{header}  (Gold: ${})", self.player.gold))?;
            for (i, item) in stock.iter().enumerate() {
                console.say(format!(
                    "  [{}] {} - ${} ({})",
                    i + 1,
                    item.name,
                    item.price,
                    item.effect_label()
                ))?;
            }
            console.say("  [0] Leave")?;

            let Some(choice) = console.prompt_number("Buy which item? ")? else {
                return Ok(());
            };
            if choice == 0 {
                return Ok(());
            }
            let Some(item) = usize::try_from(choice)
                .ok()
                .and_then(|c| stock.get(c - 1))
            else {
                continue;
            };

            if self.player.purchase(item) {
                console.say_styled(&format!("Purchased {}!", item.name), Tone::Good)?;
            } else {
                console.say_styled("Not enough gold!", Tone::Bad)?;
            }
        }
    }

    fn inventory_menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        let choice = prompt_item_choice(console, &self.player)?;
        let outcome = self.player.use_item(choice);
        render::item_use(console, &outcome)
    }

    fn save<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        match self.saves.save(&self.player) {
            Ok(()) => console.say_styled(
                &format!("Game saved to {}", self.saves.path().display()),
                Tone::Good,
            ),
            Err(e) => console.say_styled(&format!("Failed to save! ({e})"), Tone::Bad),
        }
    }

    fn load<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        match self.saves.load() {
            Ok(player) => {
                self.player = player;
                console.say_styled(
                    &format!("Loaded save from {}", self.saves.path().display()),
                    Tone::Good,
                )
            }
            Err(SaveError::NotFound(_)) => console.say_styled("No save found.", Tone::Bad),
            Err(e) => {
                warn!(error = %e, "keeping current hero after failed load");
                console.say_styled(&format!("Could not load save: {e}"), Tone::Bad)
            }
        }
    }

    fn rest<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        if self.player.rest_at_inn() {
            console.say_styled("You feel refreshed!", Tone::Good)
        } else {
            console.say_styled("Not enough gold!", Tone::Bad)
        }
    }
}
