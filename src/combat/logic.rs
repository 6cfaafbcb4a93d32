use super::types::*;
use crate::character::{level_up_if_needed, Player};
use crate::core::constants::*;
use crate::core::RandomSource;
use tracing::debug;

/// Damage dealt by `attack` against `defense`.
///
/// The base is `attack - defense` floored at 1, then shifted by a uniform
/// roll of up to a fifth of the base (at least 1) either way. The result is
/// never below 1, however lopsided the stats.
pub fn compute_damage(attack: u32, defense: u32, rng: &mut impl RandomSource) -> u32 {
    let base = attack.saturating_sub(defense).max(MIN_DAMAGE);
    let variance = (base / DAMAGE_VARIANCE_DIVISOR).max(1) as i32;
    let roll = rng.int_in_range(-variance, variance);
    (base as i64 + roll as i64).clamp(MIN_DAMAGE as i64, u32::MAX as i64) as u32
}

/// Pays out a defeated enemy's xp, gold and possible loot, then levels up.
pub fn grant_rewards(
    player: &mut Player,
    enemy: &Enemy,
    rules: &CombatRules,
    rng: &mut impl RandomSource,
) -> RewardSummary {
    player.xp = player.xp.saturating_add(enemy.xp_reward);
    player.gold = player.gold.saturating_add(enemy.gold_reward);

    let loot = if !enemy.loot_table.is_empty() && rng.percent_chance(rules.loot_chance) {
        let item = enemy.loot_table[rng.pick_index(enemy.loot_table.len())].clone();
        player.inventory.add(item.clone());
        Some(item)
    } else {
        None
    };

    let levels_reached = level_up_if_needed(player);

    RewardSummary {
        xp: enemy.xp_reward,
        gold: enemy.gold_reward,
        loot,
        levels_reached,
    }
}

/// One encounter between the player and a single enemy.
///
/// The player always opens. [`Combat::player_act`] resolves the player's
/// choice and hands the turn to the enemy, [`Combat::enemy_act`] hands it
/// back; [`Combat::take_turn`] runs both halves of a round.
#[derive(Debug, Clone)]
pub struct Combat {
    enemy: Enemy,
    state: CombatState,
    rules: CombatRules,
}

impl Combat {
    pub fn new(enemy: Enemy) -> Self {
        Self::with_rules(enemy, CombatRules::default())
    }

    pub fn with_rules(enemy: Enemy, rules: CombatRules) -> Self {
        Self {
            enemy,
            state: CombatState::PlayerTurn,
            rules,
        }
    }

    /// Opens a fight against `enemy` with the standard rules. A hero already
    /// at 0 hp never gets a turn: the fight starts in `PlayerDefeated`.
    pub fn engage(enemy: Enemy, player: &Player) -> Self {
        let mut combat = Self::new(enemy);
        if !player.is_alive() {
            combat.state = CombatState::PlayerDefeated;
        }
        combat
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Player action followed, if the fight goes on, by the enemy's reply.
    pub fn take_turn(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut impl RandomSource,
    ) -> Vec<CombatEvent> {
        let mut events = self.player_act(player, action, rng);
        if self.state == CombatState::EnemyTurn {
            events.extend(self.enemy_act(player, rng));
        }
        events
    }

    /// Resolves the player's action. No-op outside `PlayerTurn`; a player
    /// at 0 hp loses the fight instead of acting.
    pub fn player_act(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut impl RandomSource,
    ) -> Vec<CombatEvent> {
        if self.state != CombatState::PlayerTurn {
            return Vec::new();
        }
        if !player.is_alive() {
            self.state = CombatState::PlayerDefeated;
            debug!(enemy = %self.enemy.name, "player entered turn at 0 hp");
            return vec![CombatEvent::PlayerDefeated];
        }

        let mut events = Vec::new();
        let enemy_defense = self.enemy.stats.defense;

        match action {
            PlayerAction::Attack => {
                let critical = rng.percent_chance(self.rules.crit_chance);
                let mut damage = compute_damage(player.attack_power(), enemy_defense, rng);
                if critical {
                    damage = damage.saturating_mul(self.rules.crit_multiplier);
                }
                self.enemy.stats.take_damage(damage);
                events.push(CombatEvent::PlayerAttack { damage, critical });
            }
            PlayerAction::PowerAttack => {
                let cost = self.rules.power_attack_cost;
                if player.stats.hp <= cost {
                    events.push(CombatEvent::PowerAttackRejected {
                        hp: player.stats.hp,
                    });
                    return events;
                }
                player.stats.take_damage(cost);
                let attack = player.attack_power().saturating_add(self.rules.power_attack_bonus);
                let damage = compute_damage(attack, enemy_defense, rng)
                    .saturating_add(self.rules.power_attack_flat);
                self.enemy.stats.take_damage(damage);
                events.push(CombatEvent::PowerAttack {
                    damage,
                    hp_cost: cost,
                });
            }
            PlayerAction::UseItem(choice) => {
                events.push(CombatEvent::ItemUsed(player.use_item(choice)));
            }
            PlayerAction::Flee => {
                if rng.percent_chance(self.rules.flee_chance) {
                    self.state = CombatState::PlayerFled;
                    debug!(enemy = %self.enemy.name, "player fled");
                    events.push(CombatEvent::FleeSucceeded);
                    return events;
                }
                events.push(CombatEvent::FleeFailed);
            }
        }

        if self.enemy.is_alive() {
            self.state = CombatState::EnemyTurn;
        } else {
            self.state = CombatState::PlayerWon;
            debug!(enemy = %self.enemy.name, "enemy defeated");
            events.push(CombatEvent::EnemyDefeated {
                name: self.enemy.name.clone(),
            });
            let rewards = grant_rewards(player, &self.enemy, &self.rules, rng);
            events.push(CombatEvent::Rewards(rewards));
        }
        events
    }

    /// Resolves the enemy's attack. No-op outside `EnemyTurn`.
    pub fn enemy_act(&mut self, player: &mut Player, rng: &mut impl RandomSource) -> Vec<CombatEvent> {
        if self.state != CombatState::EnemyTurn {
            return Vec::new();
        }

        let mut events = Vec::new();
        let savage = rng.percent_chance(self.rules.savage_chance);
        let bonus = if savage { self.rules.savage_bonus } else { 0 };
        let attack = self.enemy.stats.attack.saturating_add(bonus);
        let damage = compute_damage(attack, player.defense_power(), rng);
        player.stats.take_damage(damage);
        events.push(CombatEvent::EnemyAttack { damage, savage });

        if player.is_alive() {
            self.state = CombatState::PlayerTurn;
        } else {
            self.state = CombatState::PlayerDefeated;
            debug!(enemy = %self.enemy.name, "player defeated");
            events.push(CombatEvent::PlayerDefeated);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CombatStats, ItemUseOutcome};
    use crate::core::{RngSource, ScriptedRandom};
    use crate::items::catalog;

    fn slime() -> Enemy {
        Enemy::new("Green Slime", CombatStats::new(1, 20, 4, 1), 10, 8)
            .with_loot(vec![catalog::small_potion()])
    }

    #[test]
    fn test_damage_always_positive() {
        let mut rng = RngSource::seeded(3);
        for attack in 0..40 {
            for defense in 0..40 {
                assert!(compute_damage(attack, defense, &mut rng) >= 1);
            }
        }
    }

    #[test]
    fn test_damage_variance_bounds() {
        // base 10 -> variance 2
        let mut low = ScriptedRandom::new([-100]);
        let mut high = ScriptedRandom::new([100]);
        assert_eq!(compute_damage(12, 2, &mut low), 8);
        assert_eq!(compute_damage(12, 2, &mut high), 12);
        // base floored at 1, variance 1, roll -1 still yields 1
        let mut rng = ScriptedRandom::new([-1]);
        assert_eq!(compute_damage(1, 50, &mut rng), 1);
    }

    #[test]
    fn test_attack_without_crit() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        // crit roll 100 (miss), variance roll 0, then enemy: savage 100 (miss), variance 0
        let mut rng = ScriptedRandom::new([100, 0, 100, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(
            events,
            vec![
                CombatEvent::PlayerAttack {
                    damage: 5,
                    critical: false
                },
                CombatEvent::EnemyAttack {
                    damage: 2,
                    savage: false
                },
            ]
        );
        assert_eq!(combat.enemy().stats.hp, 15);
        assert_eq!(player.stats.hp, 33);
        assert_eq!(combat.state(), CombatState::PlayerTurn);
    }

    #[test]
    fn test_critical_doubles_damage() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([1, 0]);
        let events = combat.player_act(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(
            events[0],
            CombatEvent::PlayerAttack {
                damage: 10,
                critical: true
            }
        );
        assert_eq!(combat.state(), CombatState::EnemyTurn);
    }

    #[test]
    fn test_power_attack_costs_hp_and_hits_hard() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([0]);
        let events = combat.player_act(&mut player, PlayerAction::PowerAttack, &mut rng);
        // (6 + 5) - 1 = 10 base, +5 flat
        assert_eq!(
            events,
            vec![CombatEvent::PowerAttack {
                damage: 15,
                hp_cost: 10
            }]
        );
        assert_eq!(player.stats.hp, 25);
        assert_eq!(combat.enemy().stats.hp, 5);
    }

    #[test]
    fn test_power_attack_rejected_at_low_hp() {
        let mut player = Player::default();
        player.stats.hp = 10;
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([]);
        let events = combat.take_turn(&mut player, PlayerAction::PowerAttack, &mut rng);
        assert_eq!(events, vec![CombatEvent::PowerAttackRejected { hp: 10 }]);
        assert_eq!(player.stats.hp, 10);
        assert_eq!(combat.enemy().stats.hp, 20);
        assert_eq!(combat.state(), CombatState::PlayerTurn);
    }

    #[test]
    fn test_use_item_spends_turn() {
        let mut player = Player::default();
        player.stats.hp = 20;
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([100, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::UseItem(1), &mut rng);
        assert!(matches!(
            events[0],
            CombatEvent::ItemUsed(ItemUseOutcome::Healed { amount: 15, .. })
        ));
        assert!(matches!(events[1], CombatEvent::EnemyAttack { .. }));
        assert_eq!(player.stats.hp, 33);
    }

    #[test]
    fn test_cancelled_item_still_spends_turn() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([100, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::UseItem(0), &mut rng);
        assert_eq!(events[0], CombatEvent::ItemUsed(ItemUseOutcome::Nothing));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_flee_success_and_failure() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([41, 100, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::Flee, &mut rng);
        assert_eq!(events[0], CombatEvent::FleeFailed);
        assert_eq!(events.len(), 2);

        let mut rng = ScriptedRandom::new([40]);
        let events = combat.take_turn(&mut player, PlayerAction::Flee, &mut rng);
        assert_eq!(events, vec![CombatEvent::FleeSucceeded]);
        assert_eq!(combat.state(), CombatState::PlayerFled);
    }

    #[test]
    fn test_savage_strike_adds_attack() {
        let mut player = Player::default();
        let mut combat = Combat::new(slime());
        // player misses crit, roll 0; enemy savage, roll 0 -> (4 + 2) - 2 = 4
        let mut rng = ScriptedRandom::new([100, 0, 1, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(
            events[1],
            CombatEvent::EnemyAttack {
                damage: 4,
                savage: true
            }
        );
    }

    #[test]
    fn test_player_defeated() {
        let mut player = Player::default();
        player.stats.hp = 1;
        let mut combat = Combat::new(slime());
        let mut rng = ScriptedRandom::new([100, 0, 100, 0]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(events.last(), Some(&CombatEvent::PlayerDefeated));
        assert_eq!(combat.state(), CombatState::PlayerDefeated);
        assert_eq!(player.stats.hp, 0);
        assert!(combat
            .take_turn(&mut player, PlayerAction::Attack, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_hero_at_zero_hp_never_acts() {
        let mut player = Player::default();
        player.stats.hp = 0;
        let mut enemy = slime();
        enemy.stats.hp = 1;

        let mut combat = Combat::engage(enemy.clone(), &player);
        assert_eq!(combat.state(), CombatState::PlayerDefeated);

        // a fight opened without the check still refuses the dead hero's turn
        let mut combat = Combat::new(enemy);
        let mut rng = ScriptedRandom::new([100, 0, 100]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(events, vec![CombatEvent::PlayerDefeated]);
        assert_eq!(combat.state(), CombatState::PlayerDefeated);
        assert_eq!(combat.enemy().stats.hp, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.gold, 30);
    }

    #[test]
    fn test_engage_with_living_hero_starts_on_player_turn() {
        let combat = Combat::engage(slime(), &Player::default());
        assert_eq!(combat.state(), CombatState::PlayerTurn);
    }

    #[test]
    fn test_extreme_stats_saturate_instead_of_overflowing() {
        let mut player = Player::default();
        player.stats.attack = u32::MAX;
        player.xp = u32::MAX - 1;
        player.gold = u32::MAX;
        let mut combat = Combat::new(slime());
        // crit, roll +max, loot miss
        let mut rng = ScriptedRandom::new([1, i32::MAX, 100]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(
            events[0],
            CombatEvent::PlayerAttack {
                damage: u32::MAX,
                critical: true
            }
        );
        assert_eq!(combat.state(), CombatState::PlayerWon);
        assert_eq!(player.gold, u32::MAX);
    }

    #[test]
    fn test_victory_grants_rewards_without_enemy_reply() {
        let mut player = Player::default();
        let mut enemy = slime();
        enemy.stats.hp = 3;
        let mut combat = Combat::new(enemy);
        // no crit, roll 0, loot roll 100 (no drop)
        let mut rng = ScriptedRandom::new([100, 0, 100]);
        let events = combat.take_turn(&mut player, PlayerAction::Attack, &mut rng);
        assert_eq!(combat.state(), CombatState::PlayerWon);
        assert_eq!(
            events.last(),
            Some(&CombatEvent::Rewards(RewardSummary {
                xp: 10,
                gold: 8,
                loot: None,
                levels_reached: vec![],
            }))
        );
        assert_eq!(player.xp, 10);
        assert_eq!(player.gold, 38);
        assert_eq!(player.stats.hp, 35);
    }

    #[test]
    fn test_grant_rewards_drops_loot_and_levels() {
        let mut player = Player::default();
        player.xp = 15;
        let rules = CombatRules::default();
        let mut rng = ScriptedRandom::new([50, 0]);
        let summary = grant_rewards(&mut player, &slime(), &rules, &mut rng);
        assert_eq!(summary.loot, Some(catalog::small_potion()));
        assert_eq!(summary.levels_reached, vec![2]);
        assert_eq!(player.inventory.len(), 3);
        assert_eq!(player.xp, 5);
    }

    #[test]
    fn test_spawn_from_perturbs_upward() {
        let template = slime();
        let mut rng = ScriptedRandom::new([2, 1, 6]);
        let enemy = Enemy::spawn_from(&template, &mut rng);
        assert_eq!(enemy.stats.attack, 6);
        assert_eq!(enemy.stats.defense, 2);
        assert_eq!(enemy.stats.max_hp, 26);
        assert_eq!(enemy.stats.hp, 26);
        assert_eq!(template.stats.max_hp, 20);
    }
}
