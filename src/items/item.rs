//! Item definitions
//!
//! The shop's goods and the treasures hidden in towns.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;

/// Everything a hunter can carry in a kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Item {
    Water,
    Rope,
    Boots,
    Machete,
    Shovel,
    Horse,
    Boat,
}

impl Item {
    /// Every item, cheapest first
    pub const ALL: [Item; 7] = [
        Item::Water,
        Item::Rope,
        Item::Boots,
        Item::Machete,
        Item::Shovel,
        Item::Horse,
        Item::Boat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Boots => "boots",
            Item::Machete => "machete",
            Item::Shovel => "shovel",
            Item::Horse => "horse",
            Item::Boat => "boat",
        }
    }

    /// Default shop price
    pub fn base_price(&self) -> u32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Boots => 5,
            Item::Machete => 6,
            Item::Shovel => 8,
            Item::Horse => 12,
            Item::Boat => 20,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Item::ALL
            .iter()
            .copied()
            .find(|item| item.name() == wanted)
            .ok_or_else(|| ParseError::UnknownItem(s.trim().to_string()))
    }
}

/// Treasures hidden one per town
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    /// The full treasure catalog
    pub const ALL: [Treasure; 4] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem, Treasure::Dust];

    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Crown => "Crown",
            Treasure::Trophy => "Trophy",
            Treasure::Gem => "Gem",
            Treasure::Dust => "Dust",
        }
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
