//! Command implementations.
//!
//! Each command implements [`Command`](crate::commands::Command) and talks
//! to the collaborators found in the
//! [`CommandContext`](crate::commands::CommandContext). Replies are sent
//! directly through the game client, in the order they are produced.
//!
//! - [`HelpCommand`] - Send the help text
//! - [`StatusCommand`] - Summarize all games of the bot account
//! - [`StatisticsCommand`] - Send the sender's results per difficulty
//! - [`InviteCommand`] - Invite a player to a new game
//! - [`SurrenderCommand`] - Give up the current game
//! - [`DifficultyCommand`] - Show or change the difficulty

mod difficulty;
mod help;
mod invite;
mod statistics;
mod status;
mod surrender;

pub use crate::commands::actions::{
    difficulty::DifficultyCommand, help::HelpCommand, invite::InviteCommand,
    statistics::StatisticsCommand, status::StatusCommand, surrender::SurrenderCommand,
};
