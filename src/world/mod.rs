//! World module
//!
//! Towns and the terrain around them.

pub mod terrain;
pub mod town;

pub use terrain::Terrain;
pub use town::{Departure, DigState, SearchState, Town};
