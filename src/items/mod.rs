//! Item system

pub mod item;
pub mod inventory;

pub use item::{Item, Treasure};
pub use inventory::{Kit, KIT_CAPACITY};
