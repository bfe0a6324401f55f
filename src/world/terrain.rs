//! Terrain surrounding a town
//!
//! Each terrain needs one item to cross.

use std::fmt;

use crate::entities::Hunter;
use crate::game::RandomSource;
use crate::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    /// Roll table order; each entry owns an equal slice of `[0, 1)`
    pub const ALL: [Terrain; 6] = [
        Terrain::Mountains,
        Terrain::Ocean,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Jungle,
        Terrain::Marsh,
    ];

    /// Pick a terrain uniformly
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Mountains => "Mountains",
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Jungle => "Jungle",
            Terrain::Marsh => "Marsh",
        }
    }

    pub fn required_item(&self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.required_item())
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
