//! Catalog of the chat commands understood by the bot.
//!
//! The catalog is built once at startup and never changes afterwards. Adding a
//! command means adding one [`CommandDefinition`] to [`CommandRegistry::new`].

use log::debug;

use crate::{
    commands::{
        Command,
        actions::{
            DifficultyCommand, HelpCommand, InviteCommand, StatisticsCommand, StatusCommand,
            SurrenderCommand,
        },
    },
    wordfeud::{Difficulty, RuleSet},
};

/// A named command and its metadata.
pub struct CommandDefinition {
    /// Exact, case-sensitive name typed in the chat
    pub name: &'static str,
    /// Only admins may run this command
    pub admin_only: bool,
    /// The game of the chat must be resolved before running this command
    pub requires_game: bool,
    /// Implementation of the command
    pub handler: Box<dyn Command>,
}

impl std::fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("admin_only", &self.admin_only)
            .field("requires_game", &self.requires_game)
            .finish_non_exhaustive()
    }
}

impl CommandDefinition {
    fn new(
        name: &'static str,
        admin_only: bool,
        requires_game: bool,
        handler: impl Command + 'static,
    ) -> Self {
        CommandDefinition {
            name,
            admin_only,
            requires_game,
            handler: Box::new(handler),
        }
    }
}

/// Immutable table of every chat command.
#[derive(Debug)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    /// Builds the catalog.
    ///
    /// # Arguments
    ///
    /// * `default_ruleset` - Ruleset used by `invite` when none is given
    pub fn new(default_ruleset: RuleSet) -> Self {
        let definitions = vec![
            CommandDefinition::new("help", false, true, HelpCommand),
            CommandDefinition::new("status", true, false, StatusCommand),
            CommandDefinition::new("statistics", false, true, StatisticsCommand),
            CommandDefinition::new("invite", true, false, InviteCommand::new(default_ruleset)),
            CommandDefinition::new("surrender", true, true, SurrenderCommand),
            CommandDefinition::new("difficulty", false, true, DifficultyCommand::query()),
            CommandDefinition::new(
                "easy",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Easy),
            ),
            CommandDefinition::new(
                "medium",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Medium),
            ),
            CommandDefinition::new(
                "hard",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Hard),
            ),
            CommandDefinition::new(
                "nightmare",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Nightmare),
            ),
            CommandDefinition::new(
                "shortest",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Shortest),
            ),
            CommandDefinition::new(
                "longest",
                false,
                true,
                DifficultyCommand::for_level(Difficulty::Longest),
            ),
        ];

        debug!("registered {} chat commands", definitions.len());

        CommandRegistry { definitions }
    }

    /// Finds a command by its exact name.
    ///
    /// Returns `None` for unknown names, including names differing only in case.
    /// Chat messages still match regardless of case because
    /// [`Commander::command_name`](super::Commander::command_name) lowercases
    /// the first token before calling this.
    pub fn lookup(&self, name: &str) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Names of all commands, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|d| d.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_command() {
        let registry = CommandRegistry::new(RuleSet::Swedish);
        let definition = registry.lookup("status").unwrap();

        assert_eq!(definition.name, "status");
        assert!(definition.admin_only);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let registry = CommandRegistry::new(RuleSet::Swedish);
        let first = registry.lookup("statistics").unwrap();
        let second = registry.lookup("statistics").unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.admin_only, second.admin_only);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = CommandRegistry::new(RuleSet::Swedish);

        assert!(registry.lookup("Status").is_none());
        assert!(registry.lookup("HELP").is_none());
    }

    #[test]
    fn test_lookup_unknown_command() {
        let registry = CommandRegistry::new(RuleSet::Swedish);

        assert!(registry.lookup("resign").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_lookup_no_prefix_matching() {
        let registry = CommandRegistry::new(RuleSet::Swedish);

        assert!(registry.lookup("stat").is_none());
        assert!(registry.lookup("helpme").is_none());
    }

    #[test]
    fn test_admin_only_commands() {
        let registry = CommandRegistry::new(RuleSet::Swedish);
        let admin_only: Vec<&str> = registry
            .names()
            .filter(|name| registry.lookup(name).unwrap().admin_only)
            .collect();

        assert_eq!(admin_only, vec!["status", "invite", "surrender"]);
    }

    #[test]
    fn test_catalog_names() {
        let registry = CommandRegistry::new(RuleSet::Swedish);
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(
            names,
            vec![
                "help",
                "status",
                "statistics",
                "invite",
                "surrender",
                "difficulty",
                "easy",
                "medium",
                "hard",
                "nightmare",
                "shortest",
                "longest"
            ]
        );
    }
}
