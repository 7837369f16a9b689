//! Towns: the places where it all happens.
//!
//! A town lives for exactly one visit. Its terrain, toughness and
//! treasure are rolled when the hunter arrives and discarded when the
//! hunter manages to leave.

pub mod logic;
pub mod types;

pub use logic::{dig, leave_town, look_for_treasure, look_for_trouble, BrawlOutcome, DigOutcome};
pub use types::{Terrain, Town, Treasure};
