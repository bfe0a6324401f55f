//! Progression systems

pub mod difficulty;

pub use difficulty::Difficulty;
