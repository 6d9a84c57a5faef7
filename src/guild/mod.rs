//! Per-guild state.
//!
//! - [`ServerState`] — A guild's deck, game session and settings
//! - [`Registry`] — Guild lookup, creating state on first reference
//! - [`Refusal`] — User-facing reasons a command was not carried out
mod refusal;
mod registry;
mod server;
mod settings;

pub use refusal::*;
pub use registry::*;
pub use server::*;
pub use settings::*;
