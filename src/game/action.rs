//! Menu actions
//!
//! One action per turn, parsed from what the player typed.

use std::str::FromStr;

use crate::entities::ShopMode;
use crate::error::ParseError;
use crate::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buy or sell one item
    Shop { mode: ShopMode, item: Item },
    /// Try to cross the terrain to the next town
    Move,
    /// Search the town for its treasure
    Hunt,
    Dig,
    LookForTrouble,
    Exit,
}

impl Action {
    /// Menu lines in display order
    pub const MENU: [&'static str; 7] = [
        "(B)uy something at the shop.",
        "(S)ell something at the shop.",
        "(M)ove on to a different town.",
        "(H)unt for treasure!",
        "(D)ig for gold!",
        "(L)ook for trouble!",
        "Give up the hunt and e(X)it.",
    ];
}

impl FromStr for Action {
    type Err = ParseError;

    /// Accepts a menu letter, with an item for the shop: `b rope`, `s boat`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(key) = words.next() else {
            return Err(ParseError::UnknownAction(String::new()));
        };
        let key = key.to_lowercase();

        match key.as_str() {
            "b" | "s" => {
                let mode: ShopMode = key.parse()?;
                let item = words
                    .next()
                    .ok_or_else(|| ParseError::MissingItem(key.clone()))?
                    .parse()?;
                Ok(Action::Shop { mode, item })
            }
            "m" => Ok(Action::Move),
            "h" => Ok(Action::Hunt),
            "d" => Ok(Action::Dig),
            "l" => Ok(Action::LookForTrouble),
            "x" => Ok(Action::Exit),
            _ => Err(ParseError::UnknownAction(s.trim().to_string())),
        }
    }
}
