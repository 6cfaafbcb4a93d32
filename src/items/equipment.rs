use super::catalog;
use super::types::{Item, ItemKind};
use serde::{Deserialize, Serialize};

/// The two equipment slots a player fills. Both slots are always occupied;
/// a fresh hero wears "Fists" and "Cloth".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Item,
    pub armor: Item,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: catalog::fists(),
            armor: catalog::cloth(),
        }
    }

    /// Puts `item` in the slot matching its kind and returns the item it
    /// replaced. Consumables are handed back untouched.
    pub fn equip(&mut self, item: Item) -> Result<Item, Item> {
        match item.kind {
            ItemKind::Weapon => Ok(std::mem::replace(&mut self.weapon, item)),
            ItemKind::Armor => Ok(std::mem::replace(&mut self.armor, item)),
            ItemKind::Consumable => Err(item),
        }
    }

    pub fn attack_bonus(&self) -> u32 {
        self.weapon.power
    }

    pub fn defense_bonus(&self) -> u32 {
        self.armor.power
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}
