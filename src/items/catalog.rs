//! Fixed item factory: everything the shop sells, enemies drop, or the
//! world hands out.

use super::types::Item;

pub fn small_potion() -> Item {
    Item::consumable("Small Potion", 15, 10)
}

pub fn large_potion() -> Item {
    Item::consumable("Large Potion", 35, 30)
}

pub fn iron_sword() -> Item {
    Item::weapon("Iron Sword", 4, 40)
}

pub fn greatsword() -> Item {
    Item::weapon("Greatsword", 8, 100)
}

pub fn leather_armor() -> Item {
    Item::armor("Leather Armor", 3, 35)
}

pub fn plate_armor() -> Item {
    Item::armor("Plate Armor", 7, 120)
}

/// Starting weapon slot.
pub fn fists() -> Item {
    Item::weapon("Fists", 0, 0)
}

/// Starting armor slot.
pub fn cloth() -> Item {
    Item::armor("Cloth", 0, 0)
}

/// Shop stock in display order.
pub fn shop_stock() -> Vec<Item> {
    vec![
        small_potion(),
        large_potion(),
        iron_sword(),
        leather_armor(),
        greatsword(),
        plate_armor(),
    ]
}
