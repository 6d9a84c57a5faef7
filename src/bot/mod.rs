//! Command parsing and dispatch.
//!
//! - [`Command`] — A `$pcb` chat command
//! - [`Bot`] — Routes messages and reactions to guild state and games
//! - [`Reply`] — What a command answers with
mod bot;
mod command;

pub use bot::*;
pub use command::*;
