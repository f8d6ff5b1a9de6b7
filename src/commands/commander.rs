//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the dispatch boundary between
//! incoming chat messages and the command catalog.
//!
//! # Flow
//!
//! ```text
//! Chat message → command name → lookup → admin check → resolve game → execute
//! ```
//!
//! # Examples
//!
//! ```ignore
//! let commander = Commander::new(
//!     RuleSet::Swedish,
//!     HashSet::from(["pierre".to_string()]),
//!     client,
//!     game_service,
//!     Arc::new(BundledMessageStore::new()),
//! );
//!
//! let outcome = commander
//!     .dispatch(&IncomingMessage {
//!         game_id: 42,
//!         sender: "pierre".to_string(),
//!         text: "Status".to_string(),
//!     })
//!     .await?;
//! ```

//! # use feudbot::commands::{Commander, IncomingMessage};
//! # use feudbot::messages::BundledMessageStore;
//! # use feudbot::wordfeud::{GameService, RuleSet, WordfeudClient};
//! # async fn example(client: Arc<dyn WordfeudClient>, service: Arc<dyn GameService>) {
//! let commander = Commander::new(
//!     RuleSet::Swedish,
//!     HashSet::from(["pierre".to_string()]),
//!     client,
//!     service,
//!     Arc::new(BundledMessageStore::new()),
//! );
//!
//! let outcome = commander
//!     .dispatch(&IncomingMessage {
//!         game_id: 42,
//!         sender: "pierre".to_string(),
//!         text: "status".to_string(),
//!     })
//!     .await;
//! # }
//! ```

use std::{collections::HashSet, sync::Arc};

use log::{debug, info, warn};

use crate::{
    commands::{CommandContext, DispatchOutcome, IncomingMessage, registry::CommandRegistry},
    messages::MessageStore,
    wordfeud::{GameService, RuleSet, WordfeudClient},
};

/// Dispatcher of chat messages to commands.
///
/// The Commander is responsible for:
/// - Extracting the command name from a chat message
/// - Looking the command up in the [`CommandRegistry`]
/// - Refusing admin-only commands to other senders
/// - Resolving the game of the chat for commands that need it
/// - Running the command with a fresh [`CommandContext`]
///
/// It holds no mutable state and can be shared between tasks.
pub struct Commander {
    /// Immutable catalog of commands
    registry: CommandRegistry,
    /// Usernames allowed to run admin-only commands
    admins: HashSet<String>,
    /// Game client shared by every command
    client: Arc<dyn WordfeudClient>,
    /// Game service shared by every command
    game_service: Arc<dyn GameService>,
    /// Message templates shared by every command
    message_store: Arc<dyn MessageStore>,
}

impl Commander {
    /// Creates a new Commander and its command catalog.
    ///
    /// # Arguments
    ///
    /// * `default_ruleset` - Ruleset used by `invite` when none is given
    /// * `admins` - Usernames allowed to run admin-only commands
    /// * `client` - Game client
    /// * `game_service` - Statistics, surrender and difficulty service
    /// * `message_store` - Translated message templates
    pub fn new(
        default_ruleset: RuleSet,
        admins: HashSet<String>,
        client: Arc<dyn WordfeudClient>,
        game_service: Arc<dyn GameService>,
        message_store: Arc<dyn MessageStore>,
    ) -> Self {
        let registry = CommandRegistry::new(default_ruleset);
        debug!(
            "available commands: {}",
            registry.names().collect::<Vec<_>>().join(", ")
        );

        Commander {
            registry,
            admins,
            client,
            game_service,
            message_store,
        }
    }

    /// Whether the sender may run admin-only commands.
    pub fn is_admin(&self, sender: &str) -> bool {
        self.admins.contains(sender)
    }

    /// Extracts the command name of a chat message.
    ///
    /// The name is the first whitespace-separated token, lowercased so players
    /// can type `Status` or `STATUS`. Returns `None` for blank messages.
    pub fn command_name(text: &str) -> Option<String> {
        text.split_whitespace().next().map(str::to_lowercase)
    }

    /// Runs the command found in a chat message.
    ///
    /// # Returns
    ///
    /// * `Ok(DispatchOutcome::Executed)` - The command ran
    /// * `Ok(DispatchOutcome::NotACommand)` - The message was blank
    /// * `Ok(DispatchOutcome::UnknownCommand)` - No command has this name
    /// * `Ok(DispatchOutcome::Forbidden)` - Admin-only command from a non-admin
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails, either while resolving the
    /// game or while the command runs. Replies already sent are not undone.
    pub async fn dispatch(
        &self,
        message: &IncomingMessage,
    ) -> Result<DispatchOutcome, anyhow::Error> {
        let Some(name) = Self::command_name(&message.text) else {
            return Ok(DispatchOutcome::NotACommand);
        };

        let Some(definition) = self.registry.lookup(&name) else {
            debug!("unknown command '{}' from {}", name, message.sender);
            return Ok(DispatchOutcome::UnknownCommand(name));
        };

        if definition.admin_only && !self.is_admin(&message.sender) {
            warn!(
                "{} tried to run admin command '{}' in game {}",
                message.sender, name, message.game_id
            );
            return Ok(DispatchOutcome::Forbidden(name));
        }

        let game = match definition.requires_game {
            true => Some(self.client.get_game(message.game_id).await?),
            false => None,
        };

        let context = CommandContext {
            message: &message.text,
            sender: &message.sender,
            game_id: message.game_id,
            game,
            client: self.client.as_ref(),
            game_service: self.game_service.as_ref(),
            message_store: self.message_store.as_ref(),
        };

        info!(
            "running '{}' for {} in game {}",
            name, message.sender, message.game_id
        );

        definition.handler.execute(&context).await?;

        Ok(DispatchOutcome::Executed(name))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::{
        messages::MockMessageStore,
        wordfeud::{Game, MockGameService, MockWordfeudClient, ServiceError, StatsLookup},
    };

    use super::*;

    fn create_test_game(id: u64) -> Game {
        Game {
            id,
            running: true,
            in_lead: false,
            lost: false,
            opponent_name: "bob".to_string(),
            ruleset: RuleSet::English,
        }
    }

    fn create_commander(
        client: MockWordfeudClient,
        game_service: MockGameService,
        message_store: MockMessageStore,
    ) -> Commander {
        Commander::new(
            RuleSet::Swedish,
            HashSet::from(["admin".to_string()]),
            Arc::new(client),
            Arc::new(game_service),
            Arc::new(message_store),
        )
    }

    fn create_message(sender: &str, text: &str) -> IncomingMessage {
        IncomingMessage {
            game_id: 1,
            sender: sender.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_command_name() {
        assert_eq!(Commander::command_name("Status"), Some("status".to_string()));
        assert_eq!(
            Commander::command_name("  invite Bob swedish"),
            Some("invite".to_string())
        );
        assert_eq!(Commander::command_name("   "), None);
        assert_eq!(Commander::command_name(""), None);
    }

    #[tokio::test]
    async fn test_dispatch_blank_message() {
        let commander = create_commander(
            MockWordfeudClient::new(),
            MockGameService::new(),
            MockMessageStore::new(),
        );

        let outcome = commander.dispatch(&create_message("bob", " ")).await;

        assert_eq!(outcome.unwrap(), DispatchOutcome::NotACommand);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let mut client = MockWordfeudClient::new();
        client.expect_chat().never();
        client.expect_get_game().never();
        let commander =
            create_commander(client, MockGameService::new(), MockMessageStore::new());

        let outcome = commander
            .dispatch(&create_message("bob", "nice move"))
            .await;

        assert_eq!(
            outcome.unwrap(),
            DispatchOutcome::UnknownCommand("nice".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_admin_commands_forbidden_to_players() {
        for text in ["status", "invite Bob", "surrender"] {
            let mut client = MockWordfeudClient::new();
            client.expect_chat().never();
            client.expect_get_game().never();
            client.expect_get_games().never();
            client.expect_invite().never();
            let mut game_service = MockGameService::new();
            game_service.expect_surrender().never();
            let commander = create_commander(client, game_service, MockMessageStore::new());

            let outcome = commander.dispatch(&create_message("bob", text)).await;

            assert!(matches!(outcome, Ok(DispatchOutcome::Forbidden(_))));
        }
    }

    #[tokio::test]
    async fn test_dispatch_admin_command_for_admin() {
        let mut client = MockWordfeudClient::new();
        client.expect_get_game().never();
        client.expect_get_games().times(1).returning(|| Ok(vec![]));
        client
            .expect_chat()
            .with(
                eq(1),
                eq("0 running games (0 in lead), 0 finished; won all!."),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        let commander =
            create_commander(client, MockGameService::new(), MockMessageStore::new());

        let outcome = commander.dispatch(&create_message("admin", "Status")).await;

        assert_eq!(outcome.unwrap(), DispatchOutcome::Executed("status".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_resolves_game() {
        let mut client = MockWordfeudClient::new();
        client
            .expect_get_game()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(create_test_game(id)));
        client
            .expect_chat()
            .with(eq(1), eq("no stats"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut game_service = MockGameService::new();
        game_service
            .expect_get_player_stats()
            .with(eq("bob"))
            .times(1)
            .returning(|_| Ok(StatsLookup::PlayerNotFound));

        let mut message_store = MockMessageStore::new();
        message_store
            .expect_get_no_stats_found()
            .returning(|_| "no stats".to_string());

        let commander = create_commander(client, game_service, message_store);

        let outcome = commander
            .dispatch(&create_message("bob", "statistics"))
            .await;

        assert_eq!(
            outcome.unwrap(),
            DispatchOutcome::Executed("statistics".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_game_resolution_failure() {
        let mut client = MockWordfeudClient::new();
        client
            .expect_get_game()
            .returning(|id| Err(ServiceError::GameNotFound(id)));
        client.expect_chat().never();
        let commander =
            create_commander(client, MockGameService::new(), MockMessageStore::new());

        let outcome = commander.dispatch(&create_message("bob", "help")).await;

        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_dispatch_command_failure_propagates() {
        let mut client = MockWordfeudClient::new();
        client
            .expect_get_games()
            .returning(|| Err(ServiceError::Unavailable("offline".to_string())));
        let commander =
            create_commander(client, MockGameService::new(), MockMessageStore::new());

        let outcome = commander.dispatch(&create_message("admin", "status")).await;

        assert!(outcome.is_err());
    }
}
