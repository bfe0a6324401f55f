//! Random rolls
//!
//! Everything random in a session comes through [`RandomSource`], so a
//! session can run on a seeded `StdRng` or on a fixed script of rolls.

use rand::Rng;

/// A source of uniform rolls in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Fair coin flip
    fn half_chance(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// Uniform integer in `1..=max`
    fn roll_amount(&mut self, max: u32) -> i32 {
        let roll = (self.next_f64() * max as f64) as i32 + 1;
        roll.clamp(1, max.max(1) as i32)
    }

    /// Uniform index into a slice of length `len` (must be > 0)
    fn pick_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, wrapping around at the end
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// How many rolls have been drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRolls {
    fn next_f64(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
