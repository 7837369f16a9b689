// Difficulty parameters
pub const EASY_TOUGHNESS: f64 = 0.0;
pub const NORMAL_TOUGHNESS: f64 = 0.4;
pub const HARD_TOUGHNESS: f64 = 0.75;

// Fraction of an item's price the shop pays when buying it back
pub const EASY_MARKDOWN: f64 = 1.0;
pub const NORMAL_MARKDOWN: f64 = 0.5;
pub const HARD_MARKDOWN: f64 = 0.25;

// Starting purse
pub const STARTING_GOLD: i64 = 10;
pub const EASY_GOLD_BONUS: i64 = 10;
pub const SCOUT_GOLD_BONUS: i64 = 90;

// Brawl odds: chance of finding no trouble, per town mood
pub const NO_TROUBLE_CHANCE_TOUGH: f64 = 0.66;
pub const NO_TROUBLE_CHANCE_MILD: f64 = 0.33;
pub const BRAWL_STAKE_MAX: i64 = 10;

// Crossing and digging
pub const ITEM_BREAK_CHANCE: f64 = 0.5;
pub const DIG_DIRT_CHANCE: f64 = 0.5;
pub const DIG_GOLD_MAX: i64 = 20;

// News log
pub const MAX_NEWS_LINES: usize = 40;
