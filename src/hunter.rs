//! The hunter: name, gold, kit, and collected treasures.

use crate::items::Item;
use crate::town::types::Treasure;

/// The player character. Gold is afford-checked on purchases but brawl
/// losses are not floored, so it can go negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    name: String,
    gold: i64,
    kit: Vec<Item>,
    treasures: Vec<Treasure>,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i64) -> Self {
        Self {
            name: name.into(),
            gold: starting_gold,
            kit: Vec::new(),
            treasures: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    pub fn change_gold(&mut self, delta: i64) {
        self.gold += delta;
    }

    pub fn kit(&self) -> &[Item] {
        &self.kit
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(&item)
    }

    /// Adds an item to the kit. The kit holds at most one of each item;
    /// returns false when it was already owned.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.kit.push(item);
        true
    }

    /// Removes an item from the kit; returns false when it wasn't there.
    pub fn remove_item(&mut self, item: Item) -> bool {
        match self.kit.iter().position(|&k| k == item) {
            Some(idx) => {
                self.kit.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_shovel(&self) -> bool {
        self.has_item(Item::Shovel)
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Records a found treasure; returns false for duplicates.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        if self.has_treasure(treasure) {
            return false;
        }
        self.treasures.push(treasure);
        true
    }

    /// The win condition: one of every treasure kind.
    pub fn has_all_treasures(&self) -> bool {
        Treasure::ALL.iter().all(|&t| self.has_treasure(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hunter_is_empty_handed() {
        let hunter = Hunter::new("Rory", 10);
        assert_eq!(hunter.name(), "Rory");
        assert_eq!(hunter.gold(), 10);
        assert!(hunter.kit().is_empty());
        assert!(hunter.treasures().is_empty());
        assert!(!hunter.has_all_treasures());
    }

    #[test]
    fn test_kit_holds_one_of_each() {
        let mut hunter = Hunter::new("Rory", 10);
        assert!(hunter.add_item(Item::Rope));
        assert!(!hunter.add_item(Item::Rope));
        assert_eq!(hunter.kit(), &[Item::Rope]);

        assert!(hunter.remove_item(Item::Rope));
        assert!(!hunter.remove_item(Item::Rope));
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn test_gold_can_go_negative() {
        let mut hunter = Hunter::new("Rory", 3);
        hunter.change_gold(-10);
        assert_eq!(hunter.gold(), -7);
    }

    #[test]
    fn test_duplicate_treasure_rejected() {
        let mut hunter = Hunter::new("Rory", 0);
        assert!(hunter.add_treasure(Treasure::Gem));
        assert!(!hunter.add_treasure(Treasure::Gem));
        assert_eq!(hunter.treasures(), &[Treasure::Gem]);
    }

    #[test]
    fn test_has_all_treasures() {
        let mut hunter = Hunter::new("Rory", 0);
        for &t in &[Treasure::Crown, Treasure::Trophy, Treasure::Gem] {
            hunter.add_treasure(t);
            assert!(!hunter.has_all_treasures());
        }
        hunter.add_treasure(Treasure::Dust);
        assert!(hunter.has_all_treasures());
    }

    #[test]
    fn test_has_shovel() {
        let mut hunter = Hunter::new("Rory", 0);
        assert!(!hunter.has_shovel());
        hunter.add_item(Item::Shovel);
        assert!(hunter.has_shovel());
    }
}
