//! Offline implementation of the Wordfeud collaborators.
//!
//! The sandbox lets the bot run without a Wordfeud account. Games and player
//! statistics are read once from a JSON fixture; chat replies are printed to
//! stdout and every other action only changes the in-memory state.
//!
//! # Fixture Format
//!
//! ```json
//! {
//!   "games": [
//!     { "id": 1, "running": true, "in_lead": true, "lost": false,
//!       "opponent_name": "anna", "ruleset": "swedish" }
//!   ],
//!   "players": [
//!     { "username": "anna",
//!       "stats": [ { "difficulty": "hard", "games_won": 2, "games_lost": 5 } ] }
//!   ]
//! }
//! ```
//!
//! # Console Format
//!
//! Messages are typed as `<game_id> <sender>: <text>`, e.g. `1 anna: statistics`.

use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use tokio::{fs, sync::Mutex};

use crate::{
    commands::IncomingMessage,
    wordfeud::{
        BoardType, Difficulty, DifficultyStats, Game, GameService, PlayerStats, RuleSet,
        ServiceError, StatsLookup, WordfeudClient,
    },
};

/// Difficulty of games that were never configured.
const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Content of a fixture file.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub players: Vec<FixturePlayer>,
}

/// Recorded results of one player.
#[derive(Debug, Deserialize)]
pub struct FixturePlayer {
    pub username: String,
    pub stats: Vec<DifficultyStats>,
}

/// Mutable state of the sandbox.
#[derive(Debug, Default)]
struct SandboxState {
    games: HashMap<u64, Game>,
    player_stats: HashMap<String, PlayerStats>,
    difficulties: HashMap<u64, Difficulty>,
}

/// In-memory [`WordfeudClient`] and [`GameService`].
#[derive(Debug)]
pub struct SandboxService {
    state: Mutex<SandboxState>,
}

impl SandboxService {
    /// Builds a sandbox from a parsed fixture.
    pub fn new(fixture: Fixture) -> Self {
        let games = fixture
            .games
            .into_iter()
            .map(|game| (game.id, game))
            .collect();

        let player_stats = fixture
            .players
            .into_iter()
            .map(|player| {
                let game_stats = player
                    .stats
                    .into_iter()
                    .map(|stats| (stats.difficulty, stats))
                    .collect();
                (
                    player.username.clone(),
                    PlayerStats {
                        username: player.username,
                        game_stats,
                    },
                )
            })
            .collect();

        SandboxService {
            state: Mutex::new(SandboxState {
                games,
                player_stats,
                difficulties: HashMap::new(),
            }),
        }
    }

    /// Reads a fixture file and builds a sandbox from it.
    ///
    /// # Errors
    ///
    /// Fails when the file can't be read or isn't a valid fixture.
    pub async fn load(path: &str) -> Result<Self, anyhow::Error> {
        let serialized_fixture = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read fixture {}", path))?;

        let fixture: Fixture = serde_json::from_str(&serialized_fixture)
            .with_context(|| format!("failed to parse fixture {}", path))?;

        info!(
            "loaded fixture with {} games and {} players",
            fixture.games.len(),
            fixture.players.len()
        );

        Ok(Self::new(fixture))
    }
}

/// Parses a console line of the form `<game_id> <sender>: <text>`.
///
/// Returns `None` when the line doesn't follow this format.
pub fn parse_console_line(line: &str) -> Option<IncomingMessage> {
    let (header, text) = line.split_once(':')?;
    let (game_id, sender) = header.trim().split_once(char::is_whitespace)?;

    let game_id = game_id.parse().ok()?;
    let sender = sender.trim();
    if sender.is_empty() {
        return None;
    }

    Some(IncomingMessage {
        game_id,
        sender: sender.to_string(),
        text: text.trim().to_string(),
    })
}

#[async_trait]
impl WordfeudClient for SandboxService {
    async fn chat(&self, game_id: u64, message: &str) -> Result<(), ServiceError> {
        if !self.state.lock().await.games.contains_key(&game_id) {
            return Err(ServiceError::GameNotFound(game_id));
        }

        println!("[game {}] {}", game_id, message);

        Ok(())
    }

    async fn get_game(&self, game_id: u64) -> Result<Game, ServiceError> {
        self.state
            .lock()
            .await
            .games
            .get(&game_id)
            .cloned()
            .ok_or(ServiceError::GameNotFound(game_id))
    }

    async fn get_games(&self) -> Result<Vec<Game>, ServiceError> {
        let mut games: Vec<Game> = self.state.lock().await.games.values().cloned().collect();
        games.sort_by_key(|game| game.id);

        Ok(games)
    }

    async fn invite(
        &self,
        username: &str,
        ruleset: RuleSet,
        board_type: BoardType,
    ) -> Result<(), ServiceError> {
        let mut state = self.state.lock().await;

        if state
            .games
            .values()
            .any(|game| !game.is_finished() && game.opponent_name == username)
        {
            return Err(ServiceError::Unavailable(format!(
                "a game against {} is already running",
                username
            )));
        }

        let id = state.games.keys().max().map_or(1, |id| id + 1);

        // The sandbox opponent accepts every other invitation
        state.games.insert(
            id,
            Game {
                id,
                running: true,
                in_lead: false,
                lost: false,
                opponent_name: username.to_string(),
                ruleset,
            },
        );

        info!(
            "invited {} to game {} ({:?}, {:?})",
            username, id, ruleset, board_type
        );

        Ok(())
    }
}

#[async_trait]
impl GameService for SandboxService {
    async fn get_player_stats(&self, username: &str) -> Result<StatsLookup, ServiceError> {
        let lookup = match self.state.lock().await.player_stats.get(username) {
            Some(player_stats) => StatsLookup::Found(player_stats.clone()),
            None => StatsLookup::PlayerNotFound,
        };

        debug!("statistics lookup for {}: {:?}", username, lookup);

        Ok(lookup)
    }

    async fn surrender(&self, game: &Game) -> Result<(), ServiceError> {
        let mut state = self.state.lock().await;
        let game = state
            .games
            .get_mut(&game.id)
            .ok_or(ServiceError::GameNotFound(game.id))?;

        game.running = false;
        game.in_lead = false;
        game.lost = true;

        Ok(())
    }

    async fn set_difficulty(
        &self,
        game: &Game,
        difficulty: Difficulty,
    ) -> Result<(), ServiceError> {
        let mut state = self.state.lock().await;
        if !state.games.contains_key(&game.id) {
            return Err(ServiceError::GameNotFound(game.id));
        }

        state.difficulties.insert(game.id, difficulty);

        Ok(())
    }

    async fn get_difficulty(&self, game: &Game) -> Result<Difficulty, ServiceError> {
        let state = self.state.lock().await;
        if !state.games.contains_key(&game.id) {
            return Err(ServiceError::GameNotFound(game.id));
        }

        Ok(state
            .difficulties
            .get(&game.id)
            .copied()
            .unwrap_or(DEFAULT_DIFFICULTY))
    }
}
