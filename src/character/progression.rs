//! XP thresholds and level-ups.

use super::player::Player;
use crate::core::constants::*;
use tracing::debug;

/// XP needed to leave `level`.
pub fn xp_threshold(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL)
}

/// Applies every level-up the player's xp pays for.
///
/// Each step spends the threshold for the current level, then grows the
/// stat block and refills hp. The threshold is recomputed after each step,
/// so one large grant can cross several levels. Returns the levels reached,
/// in order.
pub fn level_up_if_needed(player: &mut Player) -> Vec<u32> {
    let mut reached = Vec::new();
    loop {
        let need = xp_threshold(player.stats.level);
        if player.xp < need {
            break;
        }
        player.xp -= need;

        let stats = &mut player.stats;
        stats.level = stats.level.saturating_add(1);
        stats.max_hp = stats.max_hp.saturating_add(LEVEL_UP_MAX_HP);
        stats.attack = stats.attack.saturating_add(LEVEL_UP_ATTACK);
        stats.defense = stats.defense.saturating_add(LEVEL_UP_DEFENSE);
        stats.restore_full();

        debug!(level = stats.level, xp_left = player.xp, "level up");
        reached.push(stats.level);
    }
    reached
}
