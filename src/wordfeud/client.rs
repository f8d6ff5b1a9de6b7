//! Contracts of the Wordfeud collaborators used by chat commands.
//!
//! The bot never talks to the Wordfeud servers itself. Everything goes through
//! these two traits so commands can be tested against mocks.

use async_trait::async_trait;
use mockall::automock;

use crate::wordfeud::{
    ServiceError, StatsLookup,
    structs::{BoardType, Difficulty, Game, RuleSet},
};

/// Account-level access to Wordfeud: chat, games and invitations.
///
/// Implementations are responsible for delivering chat messages in the order
/// they are sent.
#[automock]
#[async_trait]
pub trait WordfeudClient: Send + Sync {
    /// Sends a chat message in a game.
    async fn chat(&self, game_id: u64, message: &str) -> Result<(), ServiceError>;
    /// Fetches a single game of the bot account.
    async fn get_game(&self, game_id: u64) -> Result<Game, ServiceError>;
    /// Fetches every game of the bot account, running or finished.
    async fn get_games(&self) -> Result<Vec<Game>, ServiceError>;
    /// Invites a player to a new game.
    async fn invite(
        &self,
        username: &str,
        ruleset: RuleSet,
        board_type: BoardType,
    ) -> Result<(), ServiceError>;
}

/// Bot-level services: statistics, surrender and difficulty settings.
#[automock]
#[async_trait]
pub trait GameService: Send + Sync {
    /// Looks up the statistics of a player.
    ///
    /// A player without any recorded game is [`StatsLookup::PlayerNotFound`],
    /// not an error.
    async fn get_player_stats(&self, username: &str) -> Result<StatsLookup, ServiceError>;
    /// Gives up the game.
    async fn surrender(&self, game: &Game) -> Result<(), ServiceError>;
    /// Changes how the bot plays in a game.
    async fn set_difficulty(&self, game: &Game, difficulty: Difficulty)
    -> Result<(), ServiceError>;
    /// Returns how the bot currently plays in a game.
    async fn get_difficulty(&self, game: &Game) -> Result<Difficulty, ServiceError>;
}
