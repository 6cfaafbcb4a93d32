//! Text for the player sheet, inventory listings and combat events.

use crate::character::{ItemUseOutcome, Player};
use crate::combat::{CombatEvent, RewardSummary};
use crate::console::{Console, Tone};
use crate::items::Inventory;
use std::io::{self, BufRead, Write};

pub fn show_player<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
) -> io::Result<()> {
    let stats = &player.stats;
    let eq = &player.equipment;
    console.say("")?;
    console.say_styled(&format!("== {} ==", player.name), Tone::Heading)?;
    console.say(format!(
        "LVL: {}  XP: {}  Gold: {}",
        stats.level, player.xp, player.gold
    ))?;
    console.say(format!("HP:  {}/{}", stats.hp, stats.max_hp))?;
    console.say(format!(
        "ATK: {} (Base {}+{})  DEF: {} (Base {}+{})",
        player.attack_power(),
        stats.attack,
        eq.weapon.power,
        player.defense_power(),
        stats.defense,
        eq.armor.power
    ))?;
    console.say(format!("Weapon: {}  Armor: {}", eq.weapon.name, eq.armor.name))
}

/// 1-based listing with prices.
pub fn list_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    if inventory.is_empty() {
        return console.say("  (empty)");
    }
    for (i, item) in inventory.iter().enumerate() {
        console.say(format!("  [{}] {}, ${}", i + 1, item, item.price))?;
    }
    Ok(())
}

pub fn item_use<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &ItemUseOutcome,
) -> io::Result<()> {
    match outcome {
        ItemUseOutcome::EquippedWeapon(item) => console.say(format!(
            "Equipped weapon: {} (ATK+{})",
            item.name, item.power
        )),
        ItemUseOutcome::EquippedArmor(item) => console.say(format!(
            "Equipped armor: {} (DEF+{})",
            item.name, item.power
        )),
        ItemUseOutcome::Healed { item, amount } => {
            let gain = console.paint(&format!("+{amount} HP"), Tone::Good);
            console.say(format!("{gain} from {}", item.name))
        }
        ItemUseOutcome::Nothing => Ok(()),
    }
}

fn rewards<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summary: &RewardSummary,
) -> io::Result<()> {
    console.say_styled(
        &format!("You gained {} XP and ${}!", summary.xp, summary.gold),
        Tone::Reward,
    )?;
    if let Some(item) = &summary.loot {
        console.say_styled(&format!("Loot found: {}!", item.name), Tone::Reward)?;
    }
    for level in &summary.levels_reached {
        console.say("")?;
        console.say_styled(
            &format!("== Level Up! You are now level {level}! =="),
            Tone::Reward,
        )?;
    }
    Ok(())
}

pub fn combat_event<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    enemy_name: &str,
    event: &CombatEvent,
) -> io::Result<()> {
    match event {
        CombatEvent::PlayerAttack { damage, critical } => {
            let crit = if *critical { " (CRITICAL)" } else { "" };
            console.say_styled(&format!("You dealt {damage} damage{crit}!"), Tone::Good)
        }
        CombatEvent::PowerAttack { damage, .. } => console.say_styled(
            &format!("You unleashed a Power Attack for {damage} damage!"),
            Tone::Good,
        ),
        CombatEvent::PowerAttackRejected { .. } => {
            console.say_styled("Not enough HP to perform Power Attack!", Tone::Bad)
        }
        CombatEvent::ItemUsed(outcome) => item_use(console, outcome),
        CombatEvent::FleeSucceeded => console.say_styled("You managed to run away!", Tone::Reward),
        CombatEvent::FleeFailed => console.say_styled("Failed to run!", Tone::Bad),
        CombatEvent::EnemyAttack { damage, savage } => {
            let tail = if *savage { " with a savage strike!" } else { "!" };
            console.say_styled(
                &format!("{enemy_name} dealt {damage} damage{tail}"),
                Tone::Bad,
            )
        }
        CombatEvent::EnemyDefeated { name } => {
            console.say("")?;
            console.say_styled(&format!("You defeated the {name}!"), Tone::Good)
        }
        CombatEvent::Rewards(summary) => rewards(console, summary),
        CombatEvent::PlayerDefeated => {
            console.say("")?;
            console.say_styled("You were defeated...", Tone::Bad)
        }
    }
}
