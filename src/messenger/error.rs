/// Failure reported by the chat platform when delivering something.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The platform refused or failed to deliver the message.
    #[error("delivery failed: {0}")]
    Rejected(String),
    /// The member could not be resolved in the guild.
    #[error("unknown member {0}")]
    UnknownMember(u64),
}
