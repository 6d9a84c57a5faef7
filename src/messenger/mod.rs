//! Outbound messaging seam.
//!
//! - [`Messenger`] — What the bot needs from the chat platform
//! - [`Embed`] — Rich message payload
//! - [`Console`] — Stdout implementation used by the console driver
//! - [`Recorder`] — Transcript implementation with injectable failures
mod console;
mod embed;
mod error;
mod messenger;
mod recorder;

pub use console::*;
pub use embed::*;
pub use error::*;
pub use messenger::*;
pub use recorder::*;
