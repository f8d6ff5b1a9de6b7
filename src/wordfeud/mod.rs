//! Wordfeud domain types and collaborator contracts.
//!
//! # Modules
//!
//! - `client` - Traits for the game client and the bot's game service
//! - `structs` - Games, rulesets, board types, difficulties and statistics
//!
//! The traits are mocked with `mockall` in tests; the binary uses the
//! [`crate::sandbox::SandboxService`] implementation.

mod client;
mod structs;

use thiserror::Error;

#[cfg(test)]
pub use crate::wordfeud::client::{MockGameService, MockWordfeudClient};
pub use crate::wordfeud::client::{GameService, WordfeudClient};
pub use crate::wordfeud::structs::{
    BoardType, Difficulty, DifficultyStats, Game, Locale, PlayerStats, RuleSet,
};

/// Failures of the Wordfeud collaborators.
///
/// None of these are handled by commands; they propagate to the dispatcher.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested game doesn't belong to the bot account.
    #[error("game {0} not found")]
    GameNotFound(u64),
    /// The service couldn't be reached or refused the request.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a statistics lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsLookup {
    /// The player has played against the bot before.
    Found(PlayerStats),
    /// No game of the player has been recorded yet.
    PlayerNotFound,
}
