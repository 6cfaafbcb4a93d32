use super::data::Location;
use crate::character::Player;
use crate::combat::Enemy;
use crate::core::constants::*;
use crate::core::RandomSource;
use crate::items::{catalog, Item};
use tracing::debug;

/// Result of one exploration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// A freshly rolled enemy to fight. Nothing has been applied yet.
    Encounter(Enemy),
    FoundGold(u32),
    FoundItem(Item),
    Rested { healed: u32 },
}

/// Explores `location` once.
///
/// Encounters are returned for the caller to fight; the peaceful events are
/// applied to the player before returning.
pub fn explore(
    player: &mut Player,
    location: &Location,
    rng: &mut impl RandomSource,
) -> ExploreOutcome {
    if !location.encounter_pool.is_empty() && rng.percent_chance(ENCOUNTER_CHANCE_PERCENT) {
        let template = &location.encounter_pool[rng.pick_index(location.encounter_pool.len())];
        let enemy = Enemy::spawn_from(template, rng);
        debug!(location = location.name, enemy = %enemy.name, "encounter");
        return ExploreOutcome::Encounter(enemy);
    }

    let event_roll = rng.int_in_range(1, 100);
    debug!(location = location.name, event_roll, "world event");
    if event_roll <= EVENT_GOLD_THRESHOLD {
        let found = rng.int_in_range(EVENT_GOLD_MIN, EVENT_GOLD_MAX) as u32;
        player.gold = player.gold.saturating_add(found);
        ExploreOutcome::FoundGold(found)
    } else if event_roll <= EVENT_POTION_THRESHOLD {
        let item = if rng.percent_chance(50) {
            catalog::small_potion()
        } else {
            catalog::large_potion()
        };
        player.inventory.add(item.clone());
        ExploreOutcome::FoundItem(item)
    } else {
        let healed = player.stats.heal(EVENT_REST_HEAL);
        ExploreOutcome::Rested { healed }
    }
}
