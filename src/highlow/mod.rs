//! High-or-Low elimination game.
//!
//! - [`Session`] — Per-guild game state machine (kind, phase, players, prompt)
//! - [`PlayerState`] — One participant's standing and pending guess
//! - [`Choice`] — A guess about the next card
//! - [`Outcome`] — How a round was settled, including the last-survivors rule
//! - [`Reaction`] — Emoji reaction events and how a session ingests them
//! - [`Announcement`] — What the game says in the channel
//! - [`Timing`] — Join and guess windows
//! - [`Game`] — The task that drives a session through its rounds
mod announcement;
mod choice;
mod game;
mod player;
mod reaction;
mod round;
mod session;
mod timer;

pub use announcement::*;
pub use choice::*;
pub use game::*;
pub use player::*;
pub use reaction::*;
pub use round::*;
pub use session::*;
pub use timer::*;
