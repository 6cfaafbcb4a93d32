use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon = 0,
    Armor = 1,
    Consumable = 2,
}

impl ItemKind {
    /// Stable numeric tag used by the text save format.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ItemKind::Weapon),
            1 => Some(ItemKind::Armor),
            2 => Some(ItemKind::Consumable),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Consumable => "Consumable",
        }
    }
}

/// A weapon, armor piece or consumable. Items are plain values; two items
/// with the same name are treated as the same item for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Attack bonus for weapons, defense bonus for armor.
    pub power: u32,
    pub heal_amount: u32,
    pub price: u32,
}

impl Item {
    pub fn weapon(name: impl Into<String>, power: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Weapon,
            power,
            heal_amount: 0,
            price,
        }
    }

    pub fn armor(name: impl Into<String>, power: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Armor,
            power,
            heal_amount: 0,
            price,
        }
    }

    pub fn consumable(name: impl Into<String>, heal_amount: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Consumable,
            power: 0,
            heal_amount,
            price,
        }
    }

    /// Short effect summary, e.g. `ATK+4`, `DEF+3` or `Heal 15`.
    pub fn effect_label(&self) -> String {
        match self.kind {
            ItemKind::Weapon => format!("ATK+{}", self.power),
            ItemKind::Armor => format!("DEF+{}", self.power),
            ItemKind::Consumable => format!("Heal {}", self.heal_amount),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.name,
            self.kind.name(),
            self.effect_label()
        )
    }
}
