//! Tagged JSON save format.

use super::SaveError;
use crate::character::Player;
use crate::core::constants::JSON_SAVE_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    /// Unix timestamp of the save.
    saved_at: i64,
    player: Player,
}

pub fn encode(player: &Player) -> Result<String, SaveError> {
    let file = SaveFile {
        version: JSON_SAVE_VERSION,
        saved_at: Utc::now().timestamp(),
        player: player.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub fn decode(text: &str) -> Result<Player, SaveError> {
    let file: SaveFile = serde_json::from_str(text)?;
    if file.version != JSON_SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion(file.version));
    }
    let mut player = file.player;
    player.stats.clamp_hp();
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog;

    #[test]
    fn test_round_trip_preserves_player() {
        let mut player = Player::new("Brannoc");
        player.gold = 512;
        player.equipment.weapon = catalog::greatsword();
        player.inventory.add(catalog::plate_armor());
        let decoded = decode(&encode(&player).unwrap()).unwrap();
        assert_eq!(decoded, player);
    }

    #[test]
    fn test_document_is_tagged() {
        let json = encode(&Player::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], JSON_SAVE_VERSION);
        assert_eq!(value["player"]["name"], "Hero");
        assert_eq!(value["player"]["stats"]["max_hp"], 35);
        assert!(value["saved_at"].is_i64());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let json = encode(&Player::default())
            .unwrap()
            .replace("\"version\": 1", "\"version\": 99");
        assert!(matches!(decode(&json), Err(SaveError::UnsupportedVersion(99))));
    }

    #[test]
    fn test_hp_clamped_on_load() {
        let mut player = Player::default();
        player.stats.hp = 500;
        let decoded = decode(&encode(&player).unwrap()).unwrap();
        assert_eq!(decoded.stats.hp, 35);
    }

    #[test]
    fn test_garbage_is_json_error() {
        assert!(matches!(decode("not json"), Err(SaveError::Json(_))));
    }
}
