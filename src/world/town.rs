//! Towns
//!
//! A town is where everything happens: shopping, brawling, digging and
//! searching for the treasure hidden there. Every action returns the text
//! to show the player.

use std::fmt;

use crate::entities::{Catalog, Hunter, Shop, ShopMode};
use crate::game::RandomSource;
use crate::items::{Item, Treasure};
use crate::progression::Difficulty;
use super::terrain::Terrain;

/// Chance of staying out of trouble in a tough town
pub const TOUGH_TOWN_CALM_CHANCE: f64 = 0.66;
/// Chance of staying out of trouble anywhere else
pub const CALM_TOWN_CALM_CHANCE: f64 = 0.33;
/// Largest purse a brawl is fought over
pub const MAX_BRAWL_GOLD: u32 = 10;
/// Largest gold find when digging
pub const MAX_DIG_GOLD: u32 = 20;

/// Whether the town's treasure has been looked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Unsearched,
    Searched,
}

/// Whether the hunter has dug here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigState {
    #[default]
    Undug,
    Dug,
}

/// Result of trying to leave town
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// True if the hunter moves on to a new town
    pub left: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    treasure: Treasure,
    tough: bool,
    items_can_break: bool,
    search: SearchState,
    dig: DigState,
}

impl Town {
    pub fn new(shop: Shop, terrain: Terrain, treasure: Treasure, tough: bool, items_can_break: bool) -> Self {
        Self {
            shop,
            terrain,
            treasure,
            tough,
            items_can_break,
            search: SearchState::default(),
            dig: DigState::default(),
        }
    }

    /// Roll a new town for a difficulty: terrain, then treasure, then toughness
    pub fn generate(rng: &mut impl RandomSource, difficulty: Difficulty, catalog: Catalog) -> Self {
        let terrain = Terrain::roll(rng);
        let treasure = Treasure::ALL[rng.pick_index(Treasure::ALL.len())];
        let tough = rng.next_f64() < difficulty.toughness();
        log::debug!(
            "Generated town: terrain={}, treasure={}, tough={}",
            terrain, treasure, tough
        );
        Self::new(
            Shop::new(difficulty.markdown(), catalog),
            terrain,
            treasure,
            tough,
            difficulty.items_can_break(),
        )
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn search_state(&self) -> SearchState {
        self.search
    }

    pub fn dig_state(&self) -> DigState {
        self.dig
    }

    /// Greet a hunter arriving in town
    pub fn hunter_arrives(&self, hunter: &Hunter) -> String {
        let flavor = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        format!("Welcome to town, {}.\n{}", hunter.name(), flavor)
    }

    /// Try to cross the surrounding terrain.
    ///
    /// A crossing that breaks the item reports `left: false`; the hunter
    /// stays put even though the crossing message was shown.
    pub fn leave_town(&self, hunter: &mut Hunter, rng: &mut impl RandomSource) -> Departure {
        let item = self.terrain.required_item();
        if !self.terrain.can_cross(hunter) {
            return Departure {
                left: false,
                message: format!(
                    "You can't leave town, {}. You don't have a {}.",
                    hunter.name(),
                    item
                ),
            };
        }

        let mut message = format!("You used your {} to cross the {}.", item, self.terrain);
        if self.items_can_break && rng.half_chance() {
            if let Err(e) = hunter.remove_item(item) {
                log::warn!("Crossing item vanished before it broke: {}", e);
            }
            message.push_str(&format!("\nUnfortunately, your {} broke.", item));
            log::debug!("{} broke crossing the {}", item, self.terrain);
            return Departure { left: false, message };
        }

        Departure { left: true, message }
    }

    /// Trade at the shop, then step back out
    pub fn enter_shop(&self, hunter: &mut Hunter, mode: ShopMode, item: Item) -> String {
        let receipt = self.shop.enter(hunter, mode, item);
        format!("{}\nYou left the shop.", receipt)
    }

    /// Search for this town's treasure. Only the first search finds anything.
    pub fn hunt_for_treasure(&mut self, hunter: &mut Hunter) -> String {
        match self.search {
            SearchState::Searched => "You have already searched this town for treasure!".to_string(),
            SearchState::Unsearched => {
                self.search = SearchState::Searched;
                let message = if hunter.add_treasure(self.treasure) {
                    format!("You found a... {}!", self.treasure)
                } else {
                    format!("You found a... {}! You already had one, though.", self.treasure)
                };
                log::debug!("{} searched and found {}", hunter.name(), self.treasure);
                message
            }
        }
    }

    /// Dig for gold. Needs a shovel; one dig per town.
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut impl RandomSource) -> String {
        if !hunter.has_item(Item::Shovel) {
            return "You can't dig for gold without a shovel.".to_string();
        }
        if self.dig == DigState::Dug {
            return "You already dug for gold in this town.".to_string();
        }

        self.dig = DigState::Dug;
        if rng.half_chance() {
            let gold = rng.roll_amount(MAX_DIG_GOLD);
            hunter.change_gold(gold);
            log::debug!("{} dug up {} gold", hunter.name(), gold);
            format!("You dug up {} gold!", gold)
        } else {
            "You dug but only found dirt.".to_string()
        }
    }

    /// Go looking for a fight. Tough towns are calmer on the surface but
    /// harder to win a brawl in.
    pub fn look_for_trouble(&self, hunter: &mut Hunter, rng: &mut impl RandomSource) -> String {
        let calm_chance = if self.tough {
            TOUGH_TOWN_CALM_CHANCE
        } else {
            CALM_TOWN_CALM_CHANCE
        };

        if rng.next_f64() <= calm_chance {
            return "You couldn't find any trouble.".to_string();
        }

        // Outcome is rolled before the purse
        let won = rng.next_f64() > calm_chance;
        let gold = rng.roll_amount(MAX_BRAWL_GOLD);
        let mut message = String::from("You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n");
        if won {
            hunter.change_gold(gold);
            message.push_str("Okay, stranger! You proved yer mettle. Here, take my gold.");
            message.push_str(&format!("\nYou won the brawl and receive {} gold.", gold));
        } else {
            hunter.change_gold(-gold);
            message.push_str("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
            message.push_str(&format!("\nYou lost the brawl and pay {} gold.", gold));
        }
        log::debug!("{} brawled: won={}, gold={}", hunter.name(), won, gold);
        message
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This nice little town is surrounded by {}.", self.terrain)
    }
}
