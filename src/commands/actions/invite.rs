//! Invite command handler.
//!
//! Invites a player to a new game: `invite <username> [ruleset] [boardType]`.
//!
//! # Validation
//!
//! - **Username**: Required, any token is accepted
//! - **Ruleset**: Optional, must name a known ruleset (case-insensitive)
//! - **Board type**: Optional, `normal` or `random` (case-insensitive)
//!
//! Any invalid invite is answered with [`INVITE_USAGE`] and no invitation is
//! sent.

use async_trait::async_trait;
use log::debug;
use thiserror::Error;

use crate::{
    commands::{Command, CommandContext},
    wordfeud::{BoardType, RuleSet},
};

/// Usage sent back for every malformed invite.
pub const INVITE_USAGE: &str = "Invite should look like this; \"invite <username> [ruleset] [boardType]\". Ex: \"invite Dude swedish random\"";

/// A validated invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteRequest {
    pub username: String,
    pub ruleset: RuleSet,
    pub board_type: BoardType,
}

/// Reasons an invite message is rejected.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InviteParseError {
    /// No username after the command name.
    #[error("missing username")]
    MissingUsername,
    /// The third token isn't a ruleset.
    #[error("unknown ruleset '{0}'")]
    UnknownRuleSet(String),
    /// The fourth token isn't a board type.
    #[error("unknown board type '{0}'")]
    UnknownBoardType(String),
}

/// Parses an invite message.
///
/// The first token is the command name and is ignored. Tokens are separated by
/// any amount of whitespace; tokens after the board type are ignored.
///
/// # Arguments
///
/// * `message` - Full chat message, e.g. `invite Dude swedish random`
/// * `default_ruleset` - Ruleset used when the message doesn't name one
pub fn parse_invite(
    message: &str,
    default_ruleset: RuleSet,
) -> Result<InviteRequest, InviteParseError> {
    let tokens: Vec<&str> = message.split_whitespace().collect();

    // 2 tokens at least: invite and username
    if tokens.len() < 2 {
        return Err(InviteParseError::MissingUsername);
    }

    let ruleset = match tokens.get(2) {
        Some(token) => token
            .parse::<RuleSet>()
            .map_err(|_| InviteParseError::UnknownRuleSet(token.to_string()))?,
        None => default_ruleset,
    };

    let board_type = match tokens.get(3) {
        Some(token) => token
            .parse::<BoardType>()
            .map_err(|_| InviteParseError::UnknownBoardType(token.to_string()))?,
        None => BoardType::Normal,
    };

    Ok(InviteRequest {
        username: tokens[1].to_string(),
        ruleset,
        board_type,
    })
}

/// Sends an invitation on behalf of an admin.
pub struct InviteCommand {
    default_ruleset: RuleSet,
}

impl InviteCommand {
    pub fn new(default_ruleset: RuleSet) -> Self {
        InviteCommand { default_ruleset }
    }
}

#[async_trait]
impl Command for InviteCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<(), anyhow::Error> {
        debug!("handling invite command: {}", context.message);

        let request = match parse_invite(context.message, self.default_ruleset) {
            Ok(request) => request,
            Err(e) => {
                debug!("invalid invite: {}", e);
                return context.reply(INVITE_USAGE).await;
            }
        };

        context
            .client
            .invite(&request.username, request.ruleset, request.board_type)
            .await?;

        debug!("invite command result {:?}", request);

        context
            .reply(&format!("Invite to {} sent!", request.username))
            .await
    }
}
