//! Chat command registry and dispatch.
//!
//! Players and admins talk to the bot through the chat of a Wordfeud game.
//! This module turns such a chat message into the execution of one command.
//!
//! # Architecture
//!
//! ```text
//! Chat message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← dispatch(): name lookup, admin check, game resolution
//! └─────────────┘
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ CommandRegistry  │  ← fixed catalog of CommandDefinition
//! └──────────────────┘
//!      │
//!      ▼
//! ┌─────────────────────┐
//! │ Command handlers    │
//! │  - help             │
//! │  - status           │
//! │  - statistics       │
//! │  - invite           │
//! │  - surrender        │
//! │  - difficulty       │
//! └─────────────────────┘
//!      │
//!      ▼
//!  Chat replies through the WordfeudClient
//! ```
//!
//! # Available Commands
//!
//! | Command | Admin | Description |
//! |---------|-------|-------------|
//! | `help` | no | Send the help text |
//! | `status` | yes | Summarize all games of the bot account |
//! | `statistics` | no | Send the sender's results per difficulty |
//! | `invite <username> [ruleset] [boardType]` | yes | Invite a player to a new game |
//! | `surrender` | yes | Give up the current game |
//! | `difficulty [level]` | no | Show or change the difficulty |
//! | `easy`, `medium`, `hard`, `nightmare`, `shortest`, `longest` | no | Change the difficulty |
//!
//! # Module Organization
//!
//! - [`commander`] - Dispatch boundary: parses, authorizes and runs commands
//! - [`registry`] - Immutable catalog mapping names to commands
//! - [`actions`] - Command implementations

use anyhow::{Context, anyhow};
use async_trait::async_trait;

mod actions;
mod commander;
mod registry;

pub use crate::commands::commander::Commander;
use crate::{
    messages::MessageStore,
    wordfeud::{Game, GameService, WordfeudClient},
};

/// Everything a command needs to run.
///
/// Built fresh by the [`Commander`] for every message and dropped once the
/// command returns.
pub struct CommandContext<'a> {
    /// Full text of the chat message, command name included
    pub message: &'a str,
    /// Username of the player who sent the message
    pub sender: &'a str,
    /// Game whose chat the message was sent in
    pub game_id: u64,
    /// Snapshot of that game, for commands declaring `requires_game`
    pub game: Option<Game>,
    /// Game client used to chat, list games and invite players
    pub client: &'a dyn WordfeudClient,
    /// Statistics, surrender and difficulty service
    pub game_service: &'a dyn GameService,
    /// Translated message templates
    pub message_store: &'a dyn MessageStore,
}

impl CommandContext<'_> {
    /// Returns the resolved game.
    ///
    /// # Errors
    ///
    /// Fails when the context was built without a game, meaning the command
    /// was registered without `requires_game`.
    pub fn game(&self) -> Result<&Game, anyhow::Error> {
        self.game
            .as_ref()
            .ok_or_else(|| anyhow!("no game resolved for game {}", self.game_id))
    }

    /// Sends a chat message in the game the command came from.
    pub async fn reply(&self, message: &str) -> Result<(), anyhow::Error> {
        self.client
            .chat(self.game_id, message)
            .await
            .with_context(|| format!("failed to chat in game {}", self.game_id))
    }
}

/// A unit of work triggered by a chat message.
///
/// Implementations don't check admin rights; the [`Commander`] does it before
/// calling [`Command::execute`].
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error>;
}

/// A chat message addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Game whose chat the message was sent in
    pub game_id: u64,
    /// Username of the sender
    pub sender: String,
    /// Raw message text
    pub text: String,
}

/// What the [`Commander`] did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message was empty.
    NotACommand,
    /// No command has this name. Nothing was sent.
    UnknownCommand(String),
    /// The command is admin-only and the sender isn't an admin. Nothing was sent.
    Forbidden(String),
    /// The command ran to completion.
    Executed(String),
}
