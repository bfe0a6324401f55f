//! Difficulty settings
//!
//! The mode picked at the start of a session fixes starting gold, how much
//! the shops pay back, how rough the towns are and whether crossing gear can break.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::items::Item;

/// Game difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Starts with a title and a kinder world
    Special,
    /// Deep pockets and a full kit, for trying things out
    Test,
}

impl Difficulty {
    /// Gold the hunter starts with
    pub fn starting_gold(&self) -> i32 {
        match self {
            Difficulty::Normal | Difficulty::Hard => 10,
            Difficulty::Easy | Difficulty::Special => 20,
            Difficulty::Test => 100,
        }
    }

    /// Multiplier applied to catalog prices when selling
    pub fn markdown(&self) -> f64 {
        match self {
            Difficulty::Normal | Difficulty::Test => 0.5,
            Difficulty::Hard => 0.25,
            Difficulty::Easy | Difficulty::Special => 1.0,
        }
    }

    /// Chance that a new town is a tough one
    pub fn toughness(&self) -> f64 {
        match self {
            Difficulty::Normal | Difficulty::Test => 0.4,
            Difficulty::Hard => 0.75,
            Difficulty::Easy => 0.25,
            Difficulty::Special => 0.0,
        }
    }

    /// Whether crossing terrain can break the item used
    pub fn items_can_break(&self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// Name shown for the hunter, given the name they typed
    pub fn hunter_name(&self, name: &str) -> String {
        match self {
            Difficulty::Special => format!("Samurai {}", name),
            _ => name.to_string(),
        }
    }

    /// Items the hunter carries from the start
    pub fn starting_kit(&self) -> &'static [Item] {
        match self {
            Difficulty::Test => &Item::ALL,
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Special => "Special",
            Difficulty::Test => "Test",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "n" | "normal" => Ok(Difficulty::Normal),
            "h" | "hard" => Ok(Difficulty::Hard),
            "s" | "special" => Ok(Difficulty::Special),
            "test" => Ok(Difficulty::Test),
            other => Err(ParseError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        assert_eq!(Difficulty::Normal.starting_gold(), 10);
        assert_eq!(Difficulty::Hard.markdown(), 0.25);
        assert_eq!(Difficulty::Hard.toughness(), 0.75);
        assert_eq!(Difficulty::Easy.starting_gold(), 20);
        assert_eq!(Difficulty::Easy.markdown(), 1.0);
        assert_eq!(Difficulty::Special.toughness(), 0.0);
        assert_eq!(Difficulty::Test.starting_gold(), 100);
    }

    #[test]
    fn test_only_easy_suppresses_breakage() {
        assert!(!Difficulty::Easy.items_can_break());
        assert!(Difficulty::Normal.items_can_break());
        assert!(Difficulty::Hard.items_can_break());
        assert!(Difficulty::Special.items_can_break());
    }

    #[test]
    fn test_special_prefixes_name() {
        assert_eq!(Difficulty::Special.hunter_name("kenji"), "Samurai kenji");
        assert_eq!(Difficulty::Hard.hunter_name("kenji"), "kenji");
    }

    #[test]
    fn test_parse() {
        assert_eq!("H".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("test".parse::<Difficulty>(), Ok(Difficulty::Test));
        assert!("x".parse::<Difficulty>().is_err());
    }
}
