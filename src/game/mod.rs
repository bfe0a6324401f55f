//! Game module - session flow, actions and randomness

mod action;
mod dice;
mod state;

pub use action::Action;
pub use dice::{RandomSource, ScriptedRolls};
pub use state::{GameState, Session};
