use crate::IN_PROGRESS;
use crate::messenger::DeliveryError;

/// Why a command did not do anything. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("{}", IN_PROGRESS)]
    InProgress,
    #[error("There is no game in progress.")]
    NoGame,
    #[error("No more cards left!")]
    DeckEmpty,
    #[error("No changes made. Unknown style `{0}`; try `kenney` or `pixel`.")]
    UnknownStyle(String),
    #[error("No changes made. Use `on` or `off` to toggle jokers.")]
    UnknownToggle(String),
    #[error("Error when trying to start the game.")]
    StartFailed(#[source] DeliveryError),
}
