//! Data loading
//!
//! Game settings can be tuned from an external RON file.

pub mod loader;

pub use loader::GameConfig;
