//! Positional plain-text save format.
//!
//! ```text
//! <name>
//! <level> <xp> <gold>
//! <hp> <max_hp> <attack> <defense>
//! <weapon name> <weapon power>
//! <armor name> <armor power>
//! <item count>
//! <kind index>|<name>|<power>|<heal amount>|<price>   (one per item)
//! ```
//!
//! Field order is the whole schema; there is no version marker.

use super::SaveError;
use crate::character::{CombatStats, Player};
use crate::items::{Equipment, Inventory, Item, ItemKind};
use std::str::FromStr;

pub fn encode(player: &Player) -> String {
    let stats = &player.stats;
    let equipment = &player.equipment;
    let mut lines = vec![
        player.name.clone(),
        format!("{} {} {}", stats.level, player.xp, player.gold),
        format!(
            "{} {} {} {}",
            stats.hp, stats.max_hp, stats.attack, stats.defense
        ),
        format!("{} {}", equipment.weapon.name, equipment.weapon.power),
        format!("{} {}", equipment.armor.name, equipment.armor.power),
        player.inventory.len().to_string(),
    ];
    lines.extend(player.inventory.iter().map(|item| {
        format!(
            "{}|{}|{}|{}|{}",
            item.kind.index(),
            item.name,
            item.power,
            item.heal_amount,
            item.price
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Rebuilds a player from [`encode`]'s output. The hp read back is clamped
/// to the max hp read back.
pub fn decode(text: &str) -> Result<Player, SaveError> {
    let mut lines = Lines::new(text);

    let name = lines.next("name")?.to_string();

    let [level, xp, gold] = lines.numbers::<3>("level/xp/gold")?;
    let [hp, max_hp, attack, defense] = lines.numbers::<4>("hp/max hp/attack/defense")?;

    let weapon = lines.named_power("weapon")?;
    let armor = lines.named_power("armor")?;

    let [count] = lines.numbers::<1>("item count")?;
    let mut inventory = Inventory::new();
    for _ in 0..count {
        let record = lines.next("item record")?;
        inventory.add(parse_item(record).map_err(|reason| lines.malformed(reason))?);
    }

    let mut stats = CombatStats {
        level,
        hp,
        max_hp,
        attack,
        defense,
    };
    stats.clamp_hp();

    Ok(Player {
        name,
        stats,
        xp,
        gold,
        equipment: Equipment {
            weapon: Item::weapon(weapon.0, weapon.1, 0),
            armor: Item::armor(armor.0, armor.1, 0),
        },
        inventory,
    })
}

fn parse_item(record: &str) -> Result<Item, String> {
    let parts: Vec<&str> = record.split('|').collect();
    let [kind, name, power, heal_amount, price] = parts.as_slice() else {
        return Err(format!("expected 5 '|' fields, found {}", parts.len()));
    };
    let kind_index: u8 = parse_field(kind, "item kind")?;
    let kind = ItemKind::from_index(kind_index)
        .ok_or_else(|| format!("unknown item kind {kind_index}"))?;
    Ok(Item {
        name: name.to_string(),
        kind,
        power: parse_field(power, "item power")?,
        heal_amount: parse_field(heal_amount, "item heal amount")?,
        price: parse_field(price, "item price")?,
    })
}

fn parse_field<T: FromStr>(raw: &str, what: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid {what}: {raw:?}"))
}

/// Line cursor that remembers its position for error messages.
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            line_no: 0,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> SaveError {
        SaveError::Malformed {
            line: self.line_no,
            reason: reason.into(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, SaveError> {
        self.line_no += 1;
        self.inner
            .next()
            .ok_or_else(|| self.malformed(format!("missing {what}")))
    }

    fn numbers<const N: usize>(&mut self, what: &str) -> Result<[u32; N], SaveError> {
        let line = self.next(what)?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != N {
            return Err(self.malformed(format!(
                "expected {N} numbers for {what}, found {}",
                fields.len()
            )));
        }
        let mut values = [0u32; N];
        for (slot, raw) in values.iter_mut().zip(fields) {
            *slot = parse_field(raw, what).map_err(|reason| self.malformed(reason))?;
        }
        Ok(values)
    }

    /// `<name with spaces> <power>`; the power follows the last space.
    fn named_power(&mut self, what: &str) -> Result<(String, u32), SaveError> {
        let line = self.next(what)?;
        let (name, power) = line
            .trim_end()
            .rsplit_once(' ')
            .ok_or_else(|| self.malformed(format!("expected {what} name and power")))?;
        let power = parse_field(power, what).map_err(|reason| self.malformed(reason))?;
        Ok((name.to_string(), power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog;

    fn sample_player() -> Player {
        let mut player = Player::new("Ayla the Bold");
        player.stats = CombatStats {
            level: 3,
            hp: 21,
            max_hp: 45,
            attack: 10,
            defense: 4,
        };
        player.xp = 12;
        player.gold = 77;
        player.equipment.weapon = catalog::iron_sword();
        player.equipment.armor = catalog::leather_armor();
        player.inventory.add(catalog::greatsword());
        player
    }

    #[test]
    fn test_encode_layout() {
        let text = encode(&sample_player());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Ayla the Bold",
                "3 12 77",
                "21 45 10 4",
                "Iron Sword 4",
                "Leather Armor 3",
                "3",
                "2|Small Potion|0|15|10",
                "2|Small Potion|0|15|10",
                "0|Greatsword|8|0|100",
            ]
        );
        assert!(text.ends_with("|100\n"));
    }

    #[test]
    fn test_decode_restores_everything_that_was_written() {
        let original = sample_player();
        let decoded = decode(&encode(&original)).expect("decode");
        assert_eq!(decoded.name, original.name);
        assert_eq!(decoded.stats, original.stats);
        assert_eq!(decoded.xp, original.xp);
        assert_eq!(decoded.gold, original.gold);
        assert_eq!(decoded.equipment.weapon.name, "Iron Sword");
        assert_eq!(decoded.equipment.weapon.power, 4);
        assert_eq!(decoded.equipment.armor.name, "Leather Armor");
        assert_eq!(decoded.equipment.armor.power, 3);
        assert_eq!(decoded.inventory, original.inventory);
    }

    #[test]
    fn test_decode_clamps_hp() {
        let text = "Hero\n1 0 0\n99 35 6 2\nFists 0\nCloth 0\n0\n";
        let player = decode(text).expect("decode");
        assert_eq!(player.stats.hp, 35);
    }

    #[test]
    fn test_decode_accepts_crlf() {
        let text = "Hero\r\n1 0 0\r\n30 35 6 2\r\nFists 0\r\nCloth 0\r\n1\r\n2|Small Potion|0|15|10\r\n";
        let player = decode(text).expect("decode");
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.equipment.weapon.name, "Fists");
    }

    #[test]
    fn test_missing_line_reports_position() {
        let text = "Hero\n1 0 0\n30 35 6 2\nFists 0\n";
        match decode(text) {
            Err(SaveError::Malformed { line, reason }) => {
                assert_eq!(line, 5);
                assert!(reason.contains("armor"), "{reason}");
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_item_records_rejected() {
        let text = "Hero\n1 0 0\n30 35 6 2\nFists 0\nCloth 0\n2\n2|Small Potion|0|15|10\n";
        assert!(matches!(
            decode(text),
            Err(SaveError::Malformed { line: 8, .. })
        ));
    }

    #[test]
    fn test_bad_fields_rejected() {
        let bad_numbers = "Hero\n1 zero 0\n30 35 6 2\nFists 0\nCloth 0\n0\n";
        assert!(matches!(
            decode(bad_numbers),
            Err(SaveError::Malformed { line: 2, .. })
        ));

        let bad_kind = "Hero\n1 0 0\n30 35 6 2\nFists 0\nCloth 0\n1\n7|Rock|0|0|0\n";
        assert!(matches!(
            decode(bad_kind),
            Err(SaveError::Malformed { line: 7, .. })
        ));

        let short_record = "Hero\n1 0 0\n30 35 6 2\nFists 0\nCloth 0\n1\n2|Small Potion|0\n";
        assert!(matches!(
            decode(short_record),
            Err(SaveError::Malformed { line: 7, .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(
            decode(""),
            Err(SaveError::Malformed { line: 1, .. })
        ));
    }
}
