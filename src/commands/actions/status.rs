//! Status command handler.
//!
//! Summarizes every game of the bot account in a single chat line:
//!
//! ```text
//! 3 running games (1 in lead), 2 finished; won 0, lost 2 (to Alice, Bob).
//! ```
//!
//! When no finished game was lost the summary ends with `won all!.`, whatever
//! the number of finished games.

use std::fmt;

use async_trait::async_trait;
use log::debug;

use crate::{
    commands::{Command, CommandContext},
    wordfeud::Game,
};

/// Counts computed over a snapshot of all games of the bot account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GamesSummary {
    /// Games still being played
    pub running: usize,
    /// Running games where the bot leads
    pub in_lead: usize,
    /// Games no longer running
    pub finished: usize,
    /// Finished games the bot lost
    pub lost: usize,
    /// Opponents of the lost games, in the order they were encountered
    pub lost_to: Vec<String>,
}

impl GamesSummary {
    /// Partitions the games in a single pass.
    pub fn from_games(games: &[Game]) -> Self {
        let mut summary = GamesSummary::default();

        for game in games {
            if game.is_finished() {
                summary.finished += 1;

                if game.lost {
                    summary.lost += 1;
                    summary.lost_to.push(game.opponent_name.clone());
                }
            } else {
                summary.running += 1;

                if game.in_lead {
                    summary.in_lead += 1;
                }
            }
        }

        summary
    }

    /// Finished games the bot didn't lose.
    pub fn won(&self) -> usize {
        self.finished - self.lost
    }
}

impl fmt::Display for GamesSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} running games ({} in lead), {} finished; ",
            self.running, self.in_lead, self.finished
        )?;

        if self.lost > 0 {
            write!(
                f,
                "won {}, lost {} (to {})",
                self.won(),
                self.lost,
                self.lost_to.join(", ")
            )?;
        } else {
            write!(f, "won all!")?;
        }

        write!(f, ".")
    }
}

/// Sends the [`GamesSummary`] of the bot account in the current chat.
pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling status command");

        let games = context.client.get_games().await?;
        let status = GamesSummary::from_games(&games).to_string();

        debug!("status command result {}", status);

        context.reply(&status).await
    }
}
