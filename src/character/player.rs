use super::stats::{effective_attack, effective_defense, CombatStats};
use crate::core::constants::*;
use crate::items::{catalog, Equipment, Inventory, Item, ItemKind};
use serde::{Deserialize, Serialize};

/// The hero. Created once per session and replaced wholesale by a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: CombatStats,
    pub xp: u32,
    pub gold: u32,
    pub equipment: Equipment,
    pub inventory: Inventory,
}

/// What happened when an inventory item was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUseOutcome {
    EquippedWeapon(Item),
    EquippedArmor(Item),
    Healed { item: Item, amount: u32 },
    /// Cancelled or the selection did not match an item.
    Nothing,
}

impl Player {
    /// A level 1 hero with starting gold and potions.
    pub fn new(name: impl Into<String>) -> Self {
        let inventory = std::iter::repeat_with(catalog::small_potion)
            .take(STARTING_POTIONS)
            .collect();
        Self {
            name: name.into(),
            stats: CombatStats::new(1, STARTING_HP, STARTING_ATTACK, STARTING_DEFENSE),
            xp: 0,
            gold: STARTING_GOLD,
            equipment: Equipment::new(),
            inventory,
        }
    }

    pub fn attack_power(&self) -> u32 {
        effective_attack(&self.stats, &self.equipment)
    }

    pub fn defense_power(&self) -> u32 {
        effective_defense(&self.stats, &self.equipment)
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Uses the item at a 1-based inventory selection.
    ///
    /// Weapons and armor replace the equipped item of their slot (the old one
    /// is dropped; the chosen item stays in the bag). Consumables heal and are
    /// used up. `0` or an out-of-range choice does nothing.
    pub fn use_item(&mut self, choice: usize) -> ItemUseOutcome {
        let Some(item) = self.inventory.get_by_choice(choice).cloned() else {
            return ItemUseOutcome::Nothing;
        };

        if item.kind == ItemKind::Consumable {
            let amount = self.stats.heal(item.heal_amount);
            self.inventory.remove_at(choice - 1);
            return ItemUseOutcome::Healed { item, amount };
        }

        // the displaced item is dropped
        match self.equipment.equip(item.clone()) {
            Ok(_) if item.kind == ItemKind::Weapon => ItemUseOutcome::EquippedWeapon(item),
            Ok(_) => ItemUseOutcome::EquippedArmor(item),
            Err(_) => ItemUseOutcome::Nothing,
        }
    }

    /// Buys `item` if affordable. Returns false when gold is short.
    pub fn purchase(&mut self, item: &Item) -> bool {
        if self.gold < item.price {
            return false;
        }
        self.gold -= item.price;
        self.inventory.add(item.clone());
        true
    }

    /// Pays the inn and restores full health. Returns false when gold is
    /// short.
    pub fn rest_at_inn(&mut self) -> bool {
        if self.gold < INN_PRICE {
            return false;
        }
        self.gold -= INN_PRICE;
        self.stats.restore_full();
        true
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_HERO_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_matches_starting_kit() {
        let p = Player::default();
        assert_eq!(p.name, "Hero");
        assert_eq!(p.stats, CombatStats::new(1, 35, 6, 2));
        assert_eq!(p.xp, 0);
        assert_eq!(p.gold, 30);
        assert_eq!(p.inventory.len(), 2);
        assert!(p.inventory.iter().all(|i| i.name == "Small Potion"));
        assert_eq!(p.attack_power(), 6);
        assert_eq!(p.defense_power(), 2);
    }

    #[test]
    fn test_use_weapon_equips_and_keeps_in_bag() {
        let mut p = Player::default();
        p.inventory.add(catalog::iron_sword());
        let outcome = p.use_item(3);
        assert_eq!(outcome, ItemUseOutcome::EquippedWeapon(catalog::iron_sword()));
        assert_eq!(p.equipment.weapon.name, "Iron Sword");
        assert_eq!(p.attack_power(), 10);
        assert_eq!(p.inventory.len(), 3);
    }

    #[test]
    fn test_use_armor_replaces_previous_armor() {
        let mut p = Player::default();
        p.inventory.add(catalog::leather_armor());
        p.inventory.add(catalog::plate_armor());
        p.use_item(3);
        p.use_item(4);
        assert_eq!(p.equipment.armor.name, "Plate Armor");
        assert_eq!(p.defense_power(), 9);
    }

    #[test]
    fn test_use_potion_heals_clamped_and_consumes() {
        let mut p = Player::default();
        p.stats.take_damage(5);
        let outcome = p.use_item(1);
        assert_eq!(
            outcome,
            ItemUseOutcome::Healed {
                item: catalog::small_potion(),
                amount: 5
            }
        );
        assert_eq!(p.stats.hp, p.stats.max_hp);
        assert_eq!(p.inventory.len(), 1);
    }

    #[test]
    fn test_use_invalid_choice_is_noop() {
        let mut p = Player::default();
        let before = p.clone();
        assert_eq!(p.use_item(0), ItemUseOutcome::Nothing);
        assert_eq!(p.use_item(9), ItemUseOutcome::Nothing);
        assert_eq!(p, before);
    }

    #[test]
    fn test_purchase() {
        let mut p = Player::default();
        assert!(p.purchase(&catalog::small_potion()));
        assert_eq!(p.gold, 20);
        assert_eq!(p.inventory.len(), 3);
        assert!(!p.purchase(&catalog::iron_sword()));
        assert_eq!(p.gold, 20);
        assert_eq!(p.inventory.len(), 3);
    }

    #[test]
    fn test_rest_at_inn() {
        let mut p = Player::default();
        p.stats.take_damage(20);
        assert!(p.rest_at_inn());
        assert_eq!(p.stats.hp, 35);
        assert_eq!(p.gold, 20);

        p.gold = 9;
        p.stats.take_damage(1);
        assert!(!p.rest_at_inn());
        assert_eq!(p.stats.hp, 34);
        assert_eq!(p.gold, 9);
    }
}
