//! Statistics command handler.
//!
//! Sends the sender's results against the bot, one chat message per
//! difficulty level, easiest first. The reply sequence is:
//!
//! 1. the "stats info" introduction
//! 2. one message per recorded difficulty
//!
//! A player without any recorded game gets a single "no stats found" message
//! instead.

use async_trait::async_trait;
use log::debug;

use crate::{
    commands::{Command, CommandContext},
    wordfeud::StatsLookup,
};

/// Reports the sender's statistics in the language of the current game.
pub struct StatisticsCommand;

#[async_trait]
impl Command for StatisticsCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling statistics command for {}", context.sender);

        let locale = context.game()?.language_locale();
        let store = context.message_store;

        let player_stats = match context
            .game_service
            .get_player_stats(context.sender)
            .await?
        {
            StatsLookup::Found(player_stats) => player_stats,
            StatsLookup::PlayerNotFound => {
                debug!("no statistics recorded for {}", context.sender);
                return context.reply(&store.get_no_stats_found(locale)).await;
            }
        };

        let sorted_stats = player_stats.sorted_stats();
        debug!(
            "sending {} statistics of {}",
            sorted_stats.len(),
            player_stats.username
        );

        context.reply(&store.get_stats_info_message(locale)).await?;

        for difficulty_stats in sorted_stats {
            context
                .reply(&store.get_difficulty_stats(locale, &difficulty_stats))
                .await?;
        }

        Ok(())
    }
}
