//! Enemy templates. Encounters clone and perturb these.

use crate::character::CombatStats;
use crate::combat::Enemy;
use crate::items::catalog;

pub fn green_slime() -> Enemy {
    Enemy::new("Green Slime", CombatStats::new(1, 20, 4, 1), 10, 8)
        .with_loot(vec![catalog::small_potion()])
}

pub fn wild_wolf() -> Enemy {
    Enemy::new("Wild Wolf", CombatStats::new(2, 28, 6, 2), 16, 15)
        .with_loot(vec![catalog::small_potion()])
}

pub fn bandit() -> Enemy {
    Enemy::new("Bandit", CombatStats::new(3, 36, 8, 3), 25, 25)
        .with_loot(vec![catalog::large_potion()])
}

pub fn dragonling() -> Enemy {
    Enemy::new("Dragonling", CombatStats::new(5, 55, 12, 6), 45, 60)
        .with_loot(vec![catalog::greatsword()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_start_at_full_health() {
        for enemy in [green_slime(), wild_wolf(), bandit(), dragonling()] {
            assert_eq!(enemy.stats.hp, enemy.stats.max_hp, "{}", enemy.name);
            assert_eq!(enemy.loot_table.len(), 1, "{}", enemy.name);
        }
    }

    #[test]
    fn test_dragonling_drops_greatsword() {
        assert_eq!(dragonling().loot_table[0].name, "Greatsword");
        assert_eq!(dragonling().xp_reward, 45);
    }
}
