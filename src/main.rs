//! Feudbot - chat commands for a Wordfeud playing bot.
//!
//! Opponents of the bot, and its admins, control it by writing short commands
//! in the chat of a Wordfeud game. This binary wires the command dispatcher to
//! an offline sandbox so commands can be tried from a terminal.
//!
//! # Configuration
//!
//! Create a `config.yaml` file:
//!
//! ```yaml
//! bot:
//!   admins:
//!     - pierre
//!   default_ruleset: swedish
//! ```
//!
//! Any value can be overridden with `FEUDBOT_` environment variables, e.g.
//! `FEUDBOT_BOT__DEFAULT_RULESET=english`.
//!
//! # Usage
//!
//! ```bash
//! feudbot --config demos/config.yaml --sandbox demos/games.json
//! ```
//!
//! Then type messages as `<game_id> <sender>: <text>`:
//!
//! ```text
//! 1 pierre: status
//! 1 anna: statistics
//! 1 anna: hard
//! ```
//!
//! # Bot Commands
//!
//! - `help` - Display help information
//! - `statistics` - Show your results against the bot
//! - `difficulty [level]` - Show or change the difficulty
//! - `easy`, `medium`, `hard`, `nightmare`, `shortest`, `longest` - Change the difficulty
//! - `status` - Summarize all games (admin)
//! - `invite <username> [ruleset] [boardType]` - Invite a player (admin)
//! - `surrender` - Give up the current game (admin)
//!
//! # Architecture
//!
//! - [`commands`] - Command registry, dispatcher and command implementations
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`messages`] - Translated chat messages
//! - [`sandbox`] - Offline game client and game service
//! - [`wordfeud`] - Wordfeud domain types and collaborator traits
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::{collections::HashSet, sync::Arc};

use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    commands::{Commander, DispatchOutcome},
    config::Config,
    messages::BundledMessageStore,
    sandbox::{SandboxService, parse_console_line},
};

mod commands;
mod config;
mod messages;
mod sandbox;
mod wordfeud;

/// Command-line arguments for the feudbot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: String,

    /// Path to the JSON fixture describing the sandbox games and players.
    #[arg(short, long)]
    sandbox: String,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting feudbot {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let sandbox = match SandboxService::load(&args.sandbox).await {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("Failed to load sandbox: {:#}", e);
            return;
        }
    };

    if config.bot.admins.is_empty() {
        warn!("no admin configured, status, invite and surrender are disabled");
    }

    let commander = Commander::new(
        config.bot.default_ruleset,
        config.bot.admins.into_iter().collect::<HashSet<_>>(),
        sandbox.clone(),
        sandbox,
        Arc::new(BundledMessageStore::new()),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(message) = parse_console_line(&line) else {
            warn!("ignoring malformed line, expected '<game_id> <sender>: <text>'");
            continue;
        };

        match commander.dispatch(&message).await {
            Ok(DispatchOutcome::Executed(name)) => debug!("command '{}' done", name),
            Ok(DispatchOutcome::Forbidden(name)) => {
                info!("{} is not allowed to run '{}'", message.sender, name)
            }
            Ok(outcome) => debug!("ignored message: {:?}", outcome),
            Err(e) => error!("command failed in game {}: {:#}", message.game_id, e),
        }
    }

    info!("stdin closed, stopping feudbot");
}
