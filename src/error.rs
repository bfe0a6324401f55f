//! Error types
//!
//! Everything a player can trip over is reported as a message, so these
//! errors stay small. They carry the wording the message layer shows.

use std::path::PathBuf;

use thiserror::Error;

use crate::items::Item;

/// Reasons a kit refuses a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KitError {
    #[error("your kit is full ({capacity} items), so there is no room for the {item}")]
    Full { item: Item, capacity: usize },
    #[error("you already have a {0}")]
    AlreadyOwned(Item),
    #[error("you don't have a {0}")]
    NotOwned(Item),
}

/// Text that could not be understood as a game term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown item '{0}'")]
    UnknownItem(String),
    #[error("unknown difficulty '{0}' (expected h, n, e, s or test)")]
    UnknownDifficulty(String),
    #[error("unknown shop mode '{0}' (expected b or s)")]
    UnknownShopMode(String),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("the shop needs to know which item (try '{0} water')")]
    MissingItem(String),
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}
