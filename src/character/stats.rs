//! Stat block shared by players and enemies.

use crate::items::Equipment;
use serde::{Deserialize, Serialize};

/// Level, hit points and the two combat stats.
///
/// `hp` never exceeds `max_hp`: damage saturates at zero and healing clamps
/// at the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CombatStats {
    /// Full-health stat block.
    pub fn new(level: u32, max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            level,
            hp: max_hp,
            max_hp,
            attack,
            defense,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtracts damage, stopping at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Adds hp up to `max_hp`. Returns the hp actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp.saturating_sub(before)
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// Pulls `hp` back into `0..=max_hp`, e.g. after loading a save.
    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp);
    }
}

/// Base attack plus the equipped weapon's bonus.
pub fn effective_attack(stats: &CombatStats, equipment: &Equipment) -> u32 {
    stats.attack.saturating_add(equipment.attack_bonus())
}

/// Base defense plus the equipped armor's bonus.
pub fn effective_defense(stats: &CombatStats, equipment: &Equipment) -> u32 {
    stats.defense.saturating_add(equipment.defense_bonus())
}
