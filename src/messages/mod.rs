//! Locale-aware chat message templates.
//!
//! Commands never hardcode user-facing text (apart from the invite usage,
//! which is only shown to admins). They ask a [`MessageStore`] for the text
//! in the language of the game they answer in.

mod bundled;

use mockall::automock;

pub use crate::messages::bundled::BundledMessageStore;
use crate::wordfeud::{Difficulty, DifficultyStats, Locale};

/// Source of translated chat messages.
#[automock]
pub trait MessageStore: Send + Sync {
    /// Help text listing the commands available to players.
    fn get_help(&self, locale: Locale) -> String;
    /// Introduction sent before the per-difficulty statistics.
    fn get_stats_info_message(&self, locale: Locale) -> String;
    /// One line of statistics for a difficulty level.
    fn get_difficulty_stats(&self, locale: Locale, stats: &DifficultyStats) -> String;
    /// Sent when the player has no recorded game.
    fn get_no_stats_found(&self, locale: Locale) -> String;
    /// Confirms a difficulty change.
    fn get_difficulty_changed(&self, locale: Locale, difficulty: Difficulty) -> String;
    /// Reports the difficulty currently in use.
    fn get_current_difficulty(&self, locale: Locale, difficulty: Difficulty) -> String;
}
