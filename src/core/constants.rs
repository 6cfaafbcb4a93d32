// Damage
pub const DAMAGE_VARIANCE_DIVISOR: u32 = 5;
pub const MIN_DAMAGE: u32 = 1;

// Player actions
pub const CRIT_CHANCE_PERCENT: u32 = 15;
pub const CRIT_MULTIPLIER: u32 = 2;
pub const POWER_ATTACK_HP_COST: u32 = 10;
pub const POWER_ATTACK_ATTACK_BONUS: u32 = 5;
pub const POWER_ATTACK_FLAT_BONUS: u32 = 5;
pub const FLEE_CHANCE_PERCENT: u32 = 40;

// Enemy actions
pub const SAVAGE_STRIKE_CHANCE_PERCENT: u32 = 20;
pub const SAVAGE_STRIKE_ATTACK_BONUS: u32 = 2;

// Rewards and leveling
pub const LOOT_DROP_CHANCE_PERCENT: u32 = 50;
pub const XP_PER_LEVEL: u32 = 20;
pub const LEVEL_UP_MAX_HP: u32 = 5;
pub const LEVEL_UP_ATTACK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;

// Encounter scaling (inclusive upper bounds)
pub const ENCOUNTER_ATTACK_JITTER: i32 = 2;
pub const ENCOUNTER_DEFENSE_JITTER: i32 = 2;
pub const ENCOUNTER_MAX_HP_JITTER: i32 = 6;

// Exploration
pub const ENCOUNTER_CHANCE_PERCENT: u32 = 60;
pub const EVENT_GOLD_THRESHOLD: i32 = 40;
pub const EVENT_POTION_THRESHOLD: i32 = 70;
pub const EVENT_GOLD_MIN: i32 = 5;
pub const EVENT_GOLD_MAX: i32 = 25;
pub const EVENT_REST_HEAL: u32 = 5;

// Town
pub const INN_PRICE: u32 = 10;

// New hero
pub const DEFAULT_HERO_NAME: &str = "Hero";
pub const STARTING_HP: u32 = 35;
pub const STARTING_ATTACK: u32 = 6;
pub const STARTING_DEFENSE: u32 = 2;
pub const STARTING_GOLD: u32 = 30;
pub const STARTING_POTIONS: usize = 2;

// Persistence
pub const DEFAULT_SAVE_PATH: &str = "save.txt";
pub const JSON_SAVE_VERSION: u32 = 1;

// Number guessing
pub const GUESS_DEFAULT_MIN: u32 = 1;
pub const GUESS_DEFAULT_MAX: u32 = 100;
pub const GUESS_DEFAULT_ATTEMPTS: u32 = 10;
