//! Data structures describing Wordfeud games and player statistics.
//!
//! These types are snapshots handed to the bot by the game service. The bot
//! never owns game state; it reads these values and asks the service to act.

use std::{cmp::Ordering, collections::HashMap, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Snapshot of one game from the bot account's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    /// Unique identifier of the game
    pub id: u64,
    /// Whether the game is still being played
    pub running: bool,
    /// Whether the bot currently has more points than its opponent
    pub in_lead: bool,
    /// Whether the game ended with the bot behind
    pub lost: bool,
    /// Username of the opponent
    pub opponent_name: String,
    /// Dictionary and tile distribution of the game
    pub ruleset: RuleSet,
}

impl Game {
    /// A game is finished as soon as it is no longer running.
    pub fn is_finished(&self) -> bool {
        !self.running
    }

    /// Language used when talking to the opponent of this game.
    pub fn language_locale(&self) -> Locale {
        self.ruleset.locale()
    }
}

/// Error returned when a chat token doesn't name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// Dictionary a game is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    American,
    Norwegian,
    Dutch,
    Danish,
    #[default]
    Swedish,
    English,
    Spanish,
    French,
}

impl RuleSet {
    /// Locale of the players using this dictionary.
    pub fn locale(&self) -> Locale {
        match self {
            RuleSet::American | RuleSet::English => Locale::English,
            RuleSet::Norwegian => Locale::Norwegian,
            RuleSet::Dutch => Locale::Dutch,
            RuleSet::Danish => Locale::Danish,
            RuleSet::Swedish => Locale::Swedish,
            RuleSet::Spanish => Locale::Spanish,
            RuleSet::French => Locale::French,
        }
    }
}

impl FromStr for RuleSet {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "american" => Ok(RuleSet::American),
            "norwegian" => Ok(RuleSet::Norwegian),
            "dutch" => Ok(RuleSet::Dutch),
            "danish" => Ok(RuleSet::Danish),
            "swedish" => Ok(RuleSet::Swedish),
            "english" => Ok(RuleSet::English),
            "spanish" => Ok(RuleSet::Spanish),
            "french" => Ok(RuleSet::French),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Layout of the bonus squares on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardType {
    #[default]
    Normal,
    Random,
}

impl FromStr for BoardType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(BoardType::Normal),
            "random" => Ok(BoardType::Random),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Language used to pick message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Swedish,
    Norwegian,
    Dutch,
    Danish,
    Spanish,
    French,
}

/// How the bot picks its moves in a game.
///
/// The declaration order is the reporting order: `Easy` sorts first and
/// `Longest` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Nightmare,
    Shortest,
    Longest,
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "nightmare" => Ok(Difficulty::Nightmare),
            "shortest" => Ok(Difficulty::Shortest),
            "longest" => Ok(Difficulty::Longest),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Win/loss record of one player against one difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub games_won: u32,
    pub games_lost: u32,
}

impl Ord for DifficultyStats {
    fn cmp(&self, other: &Self) -> Ordering {
        self.difficulty
            .cmp(&other.difficulty)
            .then(self.games_won.cmp(&other.games_won))
            .then(self.games_lost.cmp(&other.games_lost))
    }
}

impl PartialOrd for DifficultyStats {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// All recorded results of one player, keyed by difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub username: String,
    pub game_stats: HashMap<Difficulty, DifficultyStats>,
}

impl PlayerStats {
    /// Returns the per-difficulty records, easiest first.
    pub fn sorted_stats(&self) -> Vec<DifficultyStats> {
        let mut stats: Vec<DifficultyStats> = self.game_stats.values().cloned().collect();
        stats.sort();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_game(running: bool) -> Game {
        Game {
            id: 1,
            running,
            in_lead: false,
            lost: false,
            opponent_name: "Alice".to_string(),
            ruleset: RuleSet::Swedish,
        }
    }

    #[test]
    fn test_is_finished() {
        assert!(!create_test_game(true).is_finished());
        assert!(create_test_game(false).is_finished());
    }

    #[test]
    fn test_language_locale_from_ruleset() {
        let mut game = create_test_game(true);
        assert_eq!(game.language_locale(), Locale::Swedish);

        game.ruleset = RuleSet::American;
        assert_eq!(game.language_locale(), Locale::English);
    }

    #[test]
    fn test_ruleset_from_str_ignores_case() {
        assert_eq!("swedish".parse::<RuleSet>(), Ok(RuleSet::Swedish));
        assert_eq!("Swedish".parse::<RuleSet>(), Ok(RuleSet::Swedish));
        assert_eq!("NORWEGIAN".parse::<RuleSet>(), Ok(RuleSet::Norwegian));
    }

    #[test]
    fn test_ruleset_from_str_unknown() {
        assert_eq!(
            "bogus".parse::<RuleSet>(),
            Err(UnknownVariant("bogus".to_string()))
        );
    }

    #[test]
    fn test_unknown_variant_message() {
        let error = "bogus".parse::<RuleSet>().unwrap_err();

        assert_eq!(error.to_string(), "unknown value 'bogus'");
    }

    #[test]
    fn test_board_type_from_str() {
        assert_eq!("random".parse::<BoardType>(), Ok(BoardType::Random));
        assert_eq!("Normal".parse::<BoardType>(), Ok(BoardType::Normal));
        assert!("square".parse::<BoardType>().is_err());
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Hard < Difficulty::Nightmare);
        assert!(Difficulty::Nightmare < Difficulty::Shortest);
        assert!(Difficulty::Shortest < Difficulty::Longest);
    }

    #[test]
    fn test_sorted_stats() {
        let stats = |difficulty| DifficultyStats {
            difficulty,
            games_won: 1,
            games_lost: 2,
        };
        let player_stats = PlayerStats {
            username: "alice".to_string(),
            game_stats: HashMap::from([
                (Difficulty::Hard, stats(Difficulty::Hard)),
                (Difficulty::Easy, stats(Difficulty::Easy)),
                (Difficulty::Medium, stats(Difficulty::Medium)),
            ]),
        };

        let order: Vec<Difficulty> = player_stats
            .sorted_stats()
            .iter()
            .map(|s| s.difficulty)
            .collect();

        assert_eq!(
            order,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }
}
