//! Surrender command handler.

use async_trait::async_trait;
use log::{debug, info};

use crate::commands::{Command, CommandContext};

/// Gives up the current game. Nothing is sent in the chat.
pub struct SurrenderCommand;

#[async_trait]
impl Command for SurrenderCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling surrender command");

        let game = context.game()?;
        context.game_service.surrender(game).await?;

        info!("surrendered game {}", game.id);

        Ok(())
    }
}
