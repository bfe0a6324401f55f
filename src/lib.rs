//! Treasure Hunter - a turn-based text adventure
//!
//! Travel from town to town, trade at the shops, and risk brawls and
//! digging in the hunt for every treasure in the land.

pub mod data;
pub mod entities;
pub mod error;
pub mod game;
pub mod items;
pub mod progression;
pub mod world;

// Re-export commonly used types
pub use data::GameConfig;
pub use entities::{Hunter, Shop, ShopMode};
pub use error::{ConfigError, KitError, ParseError};
pub use game::{Action, GameState, RandomSource, ScriptedRolls, Session};
pub use items::{Item, Treasure};
pub use progression::Difficulty;
pub use world::{Terrain, Town};
