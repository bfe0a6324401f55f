//! Kit
//!
//! The hunter's bag of goods. A set, so each item takes at most one slot.

use std::collections::BTreeSet;

use super::item::Item;
use crate::error::KitError;

/// Default number of kit slots
pub const KIT_CAPACITY: usize = 10;

/// Bounded set of owned items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kit {
    items: BTreeSet<Item>,
    capacity: usize,
}

impl Default for Kit {
    fn default() -> Self {
        Self::new()
    }
}

impl Kit {
    /// Create an empty kit with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(KIT_CAPACITY)
    }

    /// Create an empty kit holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: BTreeSet::new(),
            capacity,
        }
    }

    /// Get current number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Add an item. A held item is accepted again without using a slot.
    pub fn add(&mut self, item: Item) -> Result<(), KitError> {
        if self.items.contains(&item) {
            return Ok(());
        }
        if self.is_full() {
            return Err(KitError::Full { item, capacity: self.capacity });
        }
        self.items.insert(item);
        Ok(())
    }

    pub fn remove(&mut self, item: Item) -> Result<(), KitError> {
        if self.items.remove(&item) {
            Ok(())
        } else {
            Err(KitError::NotOwned(item))
        }
    }

    /// Items in catalog order
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let mut kit = Kit::new();
        assert!(kit.add(Item::Rope).is_ok());
        assert!(kit.contains(Item::Rope));
        assert_eq!(kit.count(), 1);
    }

    #[test]
    fn test_duplicate_uses_one_slot() {
        let mut kit = Kit::new();
        kit.add(Item::Boat).unwrap();
        kit.add(Item::Boat).unwrap();
        assert_eq!(kit.count(), 1);
    }

    #[test]
    fn test_kit_full() {
        let mut kit = Kit::with_capacity(3);
        kit.add(Item::Water).unwrap();
        kit.add(Item::Rope).unwrap();
        kit.add(Item::Boots).unwrap();

        assert_eq!(
            kit.add(Item::Horse),
            Err(KitError::Full { item: Item::Horse, capacity: 3 })
        );
        assert_eq!(kit.count(), 3);
        assert!(!kit.contains(Item::Horse));
        // Already held items are still fine when full
        assert!(kit.add(Item::Rope).is_ok());
    }

    #[test]
    fn test_remove() {
        let mut kit = Kit::new();
        kit.add(Item::Shovel).unwrap();
        assert!(kit.remove(Item::Shovel).is_ok());
        assert!(!kit.contains(Item::Shovel));
        assert_eq!(kit.remove(Item::Shovel), Err(KitError::NotOwned(Item::Shovel)));
        assert!(kit.is_empty());
    }
}
