use super::*;
use crate::Channel;
use crate::Guild;
use crate::ID;
use crate::Member;
use crate::Message;

/// Outbound side of the chat platform.
///
/// Everything the game engine says goes through this trait, so the engine
/// does not care whether messages end up on a gateway, a terminal or a test
/// transcript.
#[async_trait::async_trait]
pub trait Messenger: Send + Sync {
    /// Post plain text, returning the new message id.
    async fn text(&self, channel: ID<Channel>, text: &str) -> Result<ID<Message>, DeliveryError>;
    /// Post a rich message, returning the new message id.
    async fn embed(&self, channel: ID<Channel>, embed: &Embed) -> Result<ID<Message>, DeliveryError>;
    /// Add the bot's own reaction to a message.
    async fn react(
        &self,
        channel: ID<Channel>,
        message: ID<Message>,
        emoji: &str,
    ) -> Result<(), DeliveryError>;
    /// Resolve how a member is referred to in announcements.
    async fn mention(&self, guild: ID<Guild>, member: ID<Member>) -> Result<String, DeliveryError>;
}
