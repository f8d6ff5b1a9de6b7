//! Message templates compiled into the binary.
//!
//! English and Swedish are available. Every other locale falls back to
//! English.

use crate::{
    messages::MessageStore,
    wordfeud::{Difficulty, DifficultyStats, Locale},
};

/// Languages with a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    English,
    Swedish,
}

impl From<Locale> for Language {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::Swedish => Language::Swedish,
            _ => Language::English,
        }
    }
}

/// [`MessageStore`] backed by built-in English and Swedish texts.
#[derive(Debug, Default, Clone)]
pub struct BundledMessageStore;

impl BundledMessageStore {
    pub fn new() -> Self {
        BundledMessageStore
    }
}

fn difficulty_name(language: Language, difficulty: Difficulty) -> &'static str {
    match (language, difficulty) {
        (Language::English, Difficulty::Easy) => "easy",
        (Language::English, Difficulty::Medium) => "medium",
        (Language::English, Difficulty::Hard) => "hard",
        (Language::English, Difficulty::Nightmare) => "nightmare",
        (Language::English, Difficulty::Shortest) => "shortest words",
        (Language::English, Difficulty::Longest) => "longest words",
        (Language::Swedish, Difficulty::Easy) => "lätt",
        (Language::Swedish, Difficulty::Medium) => "medel",
        (Language::Swedish, Difficulty::Hard) => "svår",
        (Language::Swedish, Difficulty::Nightmare) => "mardröm",
        (Language::Swedish, Difficulty::Shortest) => "kortaste orden",
        (Language::Swedish, Difficulty::Longest) => "längsta orden",
    }
}

impl MessageStore for BundledMessageStore {
    fn get_help(&self, locale: Locale) -> String {
        match Language::from(locale) {
            Language::English => "Commands: help, statistics, difficulty, easy, medium, hard, \
                nightmare, shortest, longest. Pick a difficulty to change how I play in this game."
                .to_owned(),
            Language::Swedish => "Kommandon: help, statistics, difficulty, easy, medium, hard, \
                nightmare, shortest, longest. Välj en svårighetsgrad för att ändra hur jag spelar i \
                det här spelet."
                .to_owned(),
        }
    }

    fn get_stats_info_message(&self, locale: Locale) -> String {
        match Language::from(locale) {
            Language::English => "Your results against me:".to_owned(),
            Language::Swedish => "Dina resultat mot mig:".to_owned(),
        }
    }

    fn get_difficulty_stats(&self, locale: Locale, stats: &DifficultyStats) -> String {
        let language = Language::from(locale);
        let name = difficulty_name(language, stats.difficulty);
        match language {
            Language::English => format!(
                "{}: won {}, lost {}",
                name, stats.games_won, stats.games_lost
            ),
            Language::Swedish => format!(
                "{}: vunnit {}, förlorat {}",
                name, stats.games_won, stats.games_lost
            ),
        }
    }

    fn get_no_stats_found(&self, locale: Locale) -> String {
        match Language::from(locale) {
            Language::English => "I have no results from you yet.".to_owned(),
            Language::Swedish => "Jag har inga resultat från dig än.".to_owned(),
        }
    }

    fn get_difficulty_changed(&self, locale: Locale, difficulty: Difficulty) -> String {
        let language = Language::from(locale);
        let name = difficulty_name(language, difficulty);
        match language {
            Language::English => format!("Difficulty changed to {}.", name),
            Language::Swedish => format!("Svårighetsgraden är nu {}.", name),
        }
    }

    fn get_current_difficulty(&self, locale: Locale, difficulty: Difficulty) -> String {
        let language = Language::from(locale);
        let name = difficulty_name(language, difficulty);
        match language {
            Language::English => format!("Current difficulty is {}.", name),
            Language::Swedish => format!("Nuvarande svårighetsgrad är {}.", name),
        }
    }
}
