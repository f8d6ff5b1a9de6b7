//! Configuration file structures for the feudbot.
//!
//! The configuration is a YAML file with a single `bot` section:
//!
//! ```yaml
//! bot:
//!   # Usernames allowed to run status, invite and surrender
//!   admins:
//!     - pierre
//!   # Ruleset used by `invite` when none is given (defaults to swedish)
//!   default_ruleset: swedish
//! ```
//!
//! # Environment Variable Overrides
//!
//! Every value can be overridden with a `FEUDBOT_` environment variable, using
//! `__` to separate sections from keys:
//!
//! ```bash
//! export FEUDBOT_BOT__DEFAULT_RULESET="english"
//! export FEUDBOT_BOT__ADMINS='["pierre", "anna"]'
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::wordfeud::RuleSet;

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Bot behavior settings
    pub bot: Bot,
}

/// Bot behavior settings.
#[derive(Debug, Deserialize)]
pub struct Bot {
    /// Usernames allowed to run admin-only commands.
    ///
    /// Matched exactly against the sender of a chat message.
    #[serde(default)]
    pub admins: Vec<String>,

    /// Ruleset of invitations that don't name one.
    #[serde(default)]
    pub default_ruleset: RuleSet,
}

impl Config {
    /// Loads the configuration from a YAML file and `FEUDBOT_` environment
    /// variables, the latter taking precedence.
    ///
    /// # Errors
    ///
    /// Fails when the file is not valid YAML or a value has the wrong type.
    /// A missing file is not an error as long as the environment provides
    /// the `bot` section.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("FEUDBOT_").split("__"))
            .extract()
    }
}
