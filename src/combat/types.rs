use crate::character::CombatStats;
use crate::core::constants::*;
use crate::core::RandomSource;
use crate::items::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub stats: CombatStats,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub loot_table: Vec<Item>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, stats: CombatStats, xp_reward: u32, gold_reward: u32) -> Self {
        Self {
            name: name.into(),
            stats,
            xp_reward,
            gold_reward,
            loot_table: Vec::new(),
        }
    }

    pub fn with_loot(mut self, loot_table: Vec<Item>) -> Self {
        self.loot_table = loot_table;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Fresh copy of this template with a small upward stat roll and full hp.
    pub fn spawn_from(template: &Enemy, rng: &mut impl RandomSource) -> Enemy {
        let mut enemy = template.clone();
        let stats = &mut enemy.stats;
        stats.attack = stats.attack.saturating_add(rng.int_in_range(0, ENCOUNTER_ATTACK_JITTER) as u32);
        stats.defense = stats.defense.saturating_add(rng.int_in_range(0, ENCOUNTER_DEFENSE_JITTER) as u32);
        stats.max_hp = stats.max_hp.saturating_add(rng.int_in_range(0, ENCOUNTER_MAX_HP_JITTER) as u32);
        stats.restore_full();
        enemy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    PlayerTurn,
    EnemyTurn,
    PlayerWon,
    PlayerFled,
    PlayerDefeated,
}

impl CombatState {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            CombatState::PlayerWon | CombatState::PlayerFled | CombatState::PlayerDefeated
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    PowerAttack,
    /// 1-based inventory selection; `0` cancels but still spends the turn.
    UseItem(usize),
    Flee,
}

/// Odds and costs for one fight. `Default` carries the standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRules {
    pub crit_chance: u32,
    pub crit_multiplier: u32,
    pub power_attack_cost: u32,
    pub power_attack_bonus: u32,
    pub power_attack_flat: u32,
    pub flee_chance: u32,
    pub savage_chance: u32,
    pub savage_bonus: u32,
    pub loot_chance: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            crit_chance: CRIT_CHANCE_PERCENT,
            crit_multiplier: CRIT_MULTIPLIER,
            power_attack_cost: POWER_ATTACK_HP_COST,
            power_attack_bonus: POWER_ATTACK_ATTACK_BONUS,
            power_attack_flat: POWER_ATTACK_FLAT_BONUS,
            flee_chance: FLEE_CHANCE_PERCENT,
            savage_chance: SAVAGE_STRIKE_CHANCE_PERCENT,
            savage_bonus: SAVAGE_STRIKE_ATTACK_BONUS,
            loot_chance: LOOT_DROP_CHANCE_PERCENT,
        }
    }
}

/// Spoils of a won fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardSummary {
    pub xp: u32,
    pub gold: u32,
    pub loot: Option<Item>,
    pub levels_reached: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        critical: bool,
    },
    PowerAttack {
        damage: u32,
        hp_cost: u32,
    },
    /// Power attack refused for lack of hp; the turn is not spent.
    PowerAttackRejected {
        hp: u32,
    },
    ItemUsed(crate::character::ItemUseOutcome),
    FleeSucceeded,
    FleeFailed,
    EnemyAttack {
        damage: u32,
        savage: bool,
    },
    EnemyDefeated {
        name: String,
    },
    Rewards(RewardSummary),
    PlayerDefeated,
}
