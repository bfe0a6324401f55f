//! The hunter and the shops they trade with

pub mod hunter;
pub mod shop;

pub use hunter::Hunter;
pub use shop::{Catalog, Shop, ShopMode, MAX_PRICE};
