//! Help command handler.
//!
//! Sends the help text in the language of the current game.

use async_trait::async_trait;
use log::debug;

use crate::commands::{Command, CommandContext};

/// Sends the translated help message verbatim.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling help command");

        let locale = context.game()?.language_locale();

        context
            .reply(&context.message_store.get_help(locale))
            .await
    }
}
