//! Runtime configuration and console input for the `pcbot` driver.
use crate::DEFAULT_HOST;
use crate::GUESS_WINDOW;
use crate::JOIN_WINDOW;
use crate::highlow::Timing;
use clap::Parser;

/// Process configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Gateway credential; the console driver only checks that one is present.
    #[arg(short, long, env = "BOT_TOKEN")]
    pub token: Option<String>,
    /// Base URL card images are served from.
    #[arg(long, env = "HOST_URL", default_value = DEFAULT_HOST)]
    pub host: String,
    /// The bot's own member id.
    #[arg(long, env = "BOT_ID", default_value_t = 0)]
    pub bot_id: u64,
    /// Seconds members have to join a game.
    #[arg(long, env = "JOIN_SECS", default_value_t = JOIN_WINDOW)]
    pub join_secs: u64,
    /// Seconds members have to guess each round.
    #[arg(long, env = "GUESS_SECS", default_value_t = GUESS_WINDOW)]
    pub guess_secs: u64,
}

impl Config {
    pub fn timing(&self) -> Timing {
        Timing::from_secs(self.join_secs, self.guess_secs)
    }
}

/// One line typed into the console, standing in for a gateway event.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub enum Input {
    #[command(about = "Post a chat message", alias = "s")]
    Say {
        guild: u64,
        channel: u64,
        member: u64,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    #[command(about = "Add a reaction to a message", alias = "r")]
    React {
        guild: u64,
        channel: u64,
        message: u64,
        member: u64,
        emoji: String,
    },
}

impl TryFrom<&str> for Input {
    type Error = clap::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        Self::try_parse_from(std::iter::once(">").chain(line.split_whitespace()))
    }
}
