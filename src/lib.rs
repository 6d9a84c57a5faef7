//! Playing-card chat bot.
//!
//! Every guild the bot serves owns a deck of cards and at most one running
//! game of High-or-Low. Members draw and shuffle through text commands and
//! play the game through emoji reactions on the bot's prompt messages.
//!
//! ## Modules
//!
//! - [`cards`] — Card, suit, rank, deck and card-art paths
//! - [`highlow`] — The High-or-Low session state machine and its game loop task
//! - [`guild`] — Per-guild state, settings and the guild registry
//! - [`messenger`] — Outbound messaging seam to the chat platform
//! - [`bot`] — Command parsing and dispatch
#![allow(dead_code)]

pub mod bot;
pub mod cards;
pub mod guild;
pub mod highlow;
pub mod messenger;

#[cfg(feature = "server")]
pub mod config;

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Platform snowflake with a compile-time marker for what it identifies.
pub struct ID<T> {
    inner: u64,
    marker: PhantomData<T>,
}

/// Marker: a community served by the bot.
pub struct Guild;
/// Marker: a text channel within a guild.
pub struct Channel;
/// Marker: a message posted in a channel.
pub struct Message;
/// Marker: a guild member (human or the bot itself).
pub struct Member;

impl<T> ID<T> {
    pub fn inner(&self) -> u64 {
        self.inner
    }
}

impl<T> From<u64> for ID<T> {
    fn from(inner: u64) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}
impl<T> From<ID<T>> for u64 {
    fn from(id: ID<T>) -> Self {
        id.inner
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// COMMANDS
// ============================================================================
/// Every command must start with this prefix.
pub const PREFIX: &str = "$pcb ";
/// Reply to `info`.
pub const INFO: &str = "This bot allows users to play with a standard 52-card deck of playing cards.";
/// Warning shown when a deck command arrives while a game is running.
pub const IN_PROGRESS: &str = const_format::concatcp!(
    "A game is currently in progress! Enter `",
    PREFIX,
    "quitgame` to stop the game."
);

// ============================================================================
// HIGH-OR-LOW TIMING
// ============================================================================
/// Join window before the first round (seconds).
pub const JOIN_WINDOW: u64 = 7;
/// Guess window of every round (seconds).
pub const GUESS_WINDOW: u64 = 5;

// ============================================================================
// REACTIONS
// ============================================================================
/// Join the pending game.
pub const JOIN: &str = "🎲";
/// Guess that the next card is higher.
pub const UP: &str = "⬆️";
/// Guess that the next card is lower.
pub const DOWN: &str = "⬇️";

// ============================================================================
// PRESENTATION
// ============================================================================
/// Embed colour for game messages.
pub const GAME_COLOR: u32 = 0x3dbb6b;
/// Embed colour for plain draws.
pub const DRAW_COLOR: u32 = 0x7fb2f0;
/// Where card art is served from unless HOST_URL says otherwise.
pub const DEFAULT_HOST: &str = "http://localhost:8080";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
