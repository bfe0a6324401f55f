//! The hunter
//!
//! Gold, kit and the treasures found so far. Gold is allowed to go
//! negative; the session treats that as the end of the hunt.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::KitError;
use crate::items::{Item, Kit, Treasure};
use crate::progression::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Kit,
    treasures: BTreeSet<Treasure>,
}

impl Hunter {
    pub fn new(name: impl Into<String>, gold: i32) -> Self {
        Self::with_kit(name, gold, Kit::new())
    }

    pub fn with_kit(name: impl Into<String>, gold: i32, kit: Kit) -> Self {
        Self {
            name: name.into(),
            gold,
            kit,
            treasures: BTreeSet::new(),
        }
    }

    /// Create a hunter equipped for a difficulty
    pub fn for_difficulty(name: &str, difficulty: Difficulty, kit_capacity: usize) -> Self {
        let mut hunter = Self::with_kit(
            difficulty.hunter_name(name),
            difficulty.starting_gold(),
            Kit::with_capacity(kit_capacity),
        );
        for &item in difficulty.starting_kit() {
            if let Err(e) = hunter.add_item(item) {
                log::warn!("Could not pack starting {}: {}", item, e);
            }
        }
        hunter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn treasures(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.treasures.iter().copied()
    }

    /// Add (or with a negative delta, take) gold. No floor.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    pub fn add_item(&mut self, item: Item) -> Result<(), KitError> {
        self.kit.add(item)
    }

    pub fn remove_item(&mut self, item: Item) -> Result<(), KitError> {
        self.kit.remove(item)
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(item)
    }

    /// Returns false if the treasure was already in the collection
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        self.treasures.insert(treasure)
    }

    pub fn has_all_treasure(&self) -> bool {
        self.treasures.len() == Treasure::ALL.len()
    }

    pub fn is_broke(&self) -> bool {
        self.gold < 0
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if !self.kit.is_empty() {
            let items: Vec<&str> = self.kit.items().map(|i| i.name()).collect();
            write!(f, " and {}", items.join(", "))?;
        }
        if self.treasures.is_empty() {
            write!(f, "\nTreasures found: none")
        } else {
            let found: Vec<&str> = self.treasures.iter().map(|t| t.name()).collect();
            write!(f, "\nTreasures found: {}", found.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_up_to_capacity() {
        let mut hunter = Hunter::with_kit("ada", 10, Kit::with_capacity(Item::ALL.len() - 1));
        for &item in &Item::ALL[..Item::ALL.len() - 1] {
            assert!(hunter.add_item(item).is_ok());
            assert!(hunter.has_item(item));
        }
        assert!(matches!(hunter.add_item(Item::Boat), Err(KitError::Full { .. })));
        assert_eq!(hunter.kit().count(), hunter.kit().capacity());
    }

    #[test]
    fn test_remove_item() {
        let mut hunter = Hunter::new("ada", 10);
        hunter.add_item(Item::Rope).unwrap();
        hunter.remove_item(Item::Rope).unwrap();
        assert!(!hunter.has_item(Item::Rope));
        assert!(hunter.remove_item(Item::Rope).is_err());
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn test_change_gold_round_trip() {
        let mut hunter = Hunter::new("ada", 10);
        hunter.change_gold(17);
        hunter.change_gold(-17);
        assert_eq!(hunter.gold(), 10);

        hunter.change_gold(-11);
        assert_eq!(hunter.gold(), -1);
        assert!(hunter.is_broke());
    }

    #[test]
    fn test_change_gold_saturates() {
        let mut hunter = Hunter::new("ada", i32::MAX - 5);
        hunter.change_gold(100);
        assert_eq!(hunter.gold(), i32::MAX);
    }

    #[test]
    fn test_has_all_treasure() {
        let mut hunter = Hunter::new("ada", 10);
        for &treasure in &Treasure::ALL[..3] {
            assert!(hunter.add_treasure(treasure));
            assert!(!hunter.has_all_treasure());
        }
        assert!(!hunter.add_treasure(Treasure::Crown));
        assert!(!hunter.has_all_treasure());

        hunter.add_treasure(Treasure::Dust);
        assert!(hunter.has_all_treasure());
        hunter.add_treasure(Treasure::Gem);
        assert!(hunter.has_all_treasure());
    }

    #[test]
    fn test_test_mode_hunter() {
        let hunter = Hunter::for_difficulty("ada", Difficulty::Test, 10);
        assert_eq!(hunter.gold(), 100);
        assert_eq!(hunter.kit().count(), Item::ALL.len());
        assert!(hunter.has_item(Item::Shovel));
    }

    #[test]
    fn test_display() {
        let mut hunter = Hunter::new("ada", 3);
        hunter.add_item(Item::Water).unwrap();
        hunter.add_treasure(Treasure::Gem);
        assert_eq!(hunter.to_string(), "ada has 3 gold and water\nTreasures found: Gem");
    }
}
