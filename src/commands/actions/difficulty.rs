//! Difficulty command handlers.
//!
//! `easy`, `medium`, `hard`, `nightmare`, `shortest` and `longest` are the same
//! command bound to a fixed level, built with [`DifficultyCommand::for_level`].
//! `difficulty` is built with [`DifficultyCommand::query`]: it changes the
//! level when the message names one (`difficulty hard`) and reports the
//! current level otherwise.

use async_trait::async_trait;
use log::debug;

use crate::{
    commands::{Command, CommandContext},
    wordfeud::Difficulty,
};

/// Sets or reports how the bot plays in the current game.
pub struct DifficultyCommand {
    level: Option<Difficulty>,
}

impl DifficultyCommand {
    /// Command always switching the game to `level`.
    pub fn for_level(level: Difficulty) -> Self {
        DifficultyCommand { level: Some(level) }
    }

    /// Command reading the level from its first argument.
    pub fn query() -> Self {
        DifficultyCommand { level: None }
    }

    fn requested_level(&self, message: &str) -> Option<Difficulty> {
        self.level.or_else(|| {
            message
                .split_whitespace()
                .nth(1)
                .and_then(|token| token.parse().ok())
        })
    }
}

#[async_trait]
impl Command for DifficultyCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling difficulty command: {}", context.message);

        let game = context.game()?;
        let locale = game.language_locale();

        match self.requested_level(context.message) {
            Some(level) => {
                context.game_service.set_difficulty(game, level).await?;
                debug!("difficulty of game {} set to {:?}", game.id, level);
                context
                    .reply(&context.message_store.get_difficulty_changed(locale, level))
                    .await
            }
            None => {
                let level = context.game_service.get_difficulty(game).await?;
                context
                    .reply(&context.message_store.get_current_difficulty(locale, level))
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::{
        messages::MockMessageStore,
        wordfeud::{Game, Locale, MockGameService, MockWordfeudClient, RuleSet},
    };

    use super::*;

    fn create_test_game() -> Game {
        Game {
            id: 11,
            running: true,
            in_lead: false,
            lost: false,
            opponent_name: "bob".to_string(),
            ruleset: RuleSet::Swedish,
        }
    }

    fn create_message_store() -> MockMessageStore {
        let mut store = MockMessageStore::new();
        store
            .expect_get_difficulty_changed()
            .returning(|_, level| format!("changed {:?}", level));
        store
            .expect_get_current_difficulty()
            .returning(|_, level| format!("current {:?}", level));
        store
    }

    async fn run(
        command: DifficultyCommand,
        message: &str,
        game_service: MockGameService,
        reply: &'static str,
    ) {
        let mut client = MockWordfeudClient::new();
        client
            .expect_chat()
            .with(eq(11), eq(reply))
            .times(1)
            .returning(|_, _| Ok(()));

        let message_store = create_message_store();
        let context = CommandContext {
            message,
            sender: "bob",
            game_id: 11,
            game: Some(create_test_game()),
            client: &client,
            game_service: &game_service,
            message_store: &message_store,
        };

        command.execute(&context).await.unwrap();
    }

    #[test]
    fn test_requested_level() {
        assert_eq!(
            DifficultyCommand::for_level(Difficulty::Easy).requested_level("easy hard"),
            Some(Difficulty::Easy)
        );
        assert_eq!(
            DifficultyCommand::query().requested_level("difficulty Nightmare"),
            Some(Difficulty::Nightmare)
        );
        assert_eq!(DifficultyCommand::query().requested_level("difficulty"), None);
        assert_eq!(
            DifficultyCommand::query().requested_level("difficulty impossible"),
            None
        );
    }

    #[tokio::test]
    async fn test_for_level_sets_difficulty() {
        let mut game_service = MockGameService::new();
        game_service
            .expect_set_difficulty()
            .withf(|game, level| game.id == 11 && *level == Difficulty::Hard)
            .times(1)
            .returning(|_, _| Ok(()));
        game_service.expect_get_difficulty().never();

        run(
            DifficultyCommand::for_level(Difficulty::Hard),
            "hard",
            game_service,
            "changed Hard",
        )
        .await;
    }

    #[tokio::test]
    async fn test_query_with_level_sets_difficulty() {
        let mut game_service = MockGameService::new();
        game_service
            .expect_set_difficulty()
            .withf(|_, level| *level == Difficulty::Longest)
            .times(1)
            .returning(|_, _| Ok(()));

        run(
            DifficultyCommand::query(),
            "difficulty longest",
            game_service,
            "changed Longest",
        )
        .await;
    }

    #[tokio::test]
    async fn test_query_without_level_reports_current() {
        let mut game_service = MockGameService::new();
        game_service.expect_set_difficulty().never();
        game_service
            .expect_get_difficulty()
            .times(1)
            .returning(|_| Ok(Difficulty::Medium));

        run(
            DifficultyCommand::query(),
            "difficulty",
            game_service,
            "current Medium",
        )
        .await;
    }

    #[tokio::test]
    async fn test_difficulty_uses_game_locale() {
        let mut game_service = MockGameService::new();
        game_service.expect_set_difficulty().returning(|_, _| Ok(()));

        let mut client = MockWordfeudClient::new();
        client.expect_chat().returning(|_, _| Ok(()));

        let mut message_store = MockMessageStore::new();
        message_store
            .expect_get_difficulty_changed()
            .with(eq(Locale::Swedish), eq(Difficulty::Easy))
            .times(1)
            .returning(|_, _| "ändrad".to_string());

        let context = CommandContext {
            message: "easy",
            sender: "bob",
            game_id: 11,
            game: Some(create_test_game()),
            client: &client,
            game_service: &game_service,
            message_store: &message_store,
        };

        DifficultyCommand::for_level(Difficulty::Easy)
            .execute(&context)
            .await
            .unwrap();
    }
}
