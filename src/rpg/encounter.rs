//! Interactive driver for a single fight.

use super::render;
use crate::character::Player;
use crate::combat::{Combat, CombatEvent, CombatState, Enemy, PlayerAction};
use crate::console::{Console, Tone};
use crate::core::RandomSource;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Fights `enemy` until someone wins or the player escapes. Returns the
/// terminal state.
pub fn run_encounter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    enemy: Enemy,
    rng: &mut impl RandomSource,
) -> io::Result<CombatState> {
    console.say("")?;
    console.say_styled(&format!("== A wild {} appears! ==", enemy.name), Tone::Bad)?;

    let mut combat = Combat::engage(enemy, player);
    if combat.state() == CombatState::PlayerDefeated {
        render::combat_event(console, &combat.enemy().name, &CombatEvent::PlayerDefeated)?;
    }
    while !combat.is_over() {
        let enemy = combat.enemy();
        console.say("")?;
        console.say(format!(
            "{} HP: {}/{}  |  {} HP: {}/{}",
            player.name,
            player.stats.hp,
            player.stats.max_hp,
            enemy.name,
            enemy.stats.hp,
            enemy.stats.max_hp
        ))?;

        let action = prompt_action(console, player)?;
        let enemy_name = combat.enemy().name.clone();
        for event in combat.take_turn(player, action, rng) {
            render::combat_event(console, &enemy_name, &event)?;
        }
    }

    info!(enemy = %combat.enemy().name, outcome = ?combat.state(), "encounter resolved");
    Ok(combat.state())
}

/// Re-prompts on malformed or unknown choices; neither spends the turn.
fn prompt_action<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
) -> io::Result<PlayerAction> {
    loop {
        console.say("")?;
        console.say("Your turn. Choose action:")?;
        console.say("  1) Attack")?;
        console.say("  2) Power Attack (costs 10 HP, high damage)")?;
        console.say("  3) Use/Equip Item")?;
        console.say("  4) Attempt to Run")?;
        let action = match console.prompt_number("> ")? {
            Some(1) => PlayerAction::Attack,
            Some(2) => PlayerAction::PowerAttack,
            Some(3) => PlayerAction::UseItem(prompt_item_choice(console, player)?),
            Some(4) => PlayerAction::Flee,
            _ => continue,
        };
        return Ok(action);
    }
}

/// Lists the bag and reads a 1-based selection. Malformed input and
/// negative numbers come back as `0` (cancel).
pub fn prompt_item_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
) -> io::Result<usize> {
    console.say("")?;
    console.say("Inventory:")?;
    render::list_inventory(console, &player.inventory)?;
    console.say("")?;
    let choice = console.prompt_number("Enter item number to equip/use (0 to cancel): ")?;
    Ok(choice
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0))
}
