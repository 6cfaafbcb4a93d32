//! Location definitions.

use super::bestiary;
use crate::combat::Enemy;

/// A place the hero can explore, with the enemies that roam it.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub encounter_pool: Vec<Enemy>,
}

/// Returns every explorable location, in menu order.
pub fn get_all_locations() -> Vec<Location> {
    vec![
        Location {
            name: "Meadow",
            encounter_pool: vec![bestiary::green_slime(), bestiary::wild_wolf()],
        },
        Location {
            name: "Bandit Road",
            encounter_pool: vec![bestiary::bandit(), bestiary::wild_wolf()],
        },
        Location {
            name: "Volcanic Cave",
            encounter_pool: vec![bestiary::dragonling(), bestiary::bandit()],
        },
    ]
}
