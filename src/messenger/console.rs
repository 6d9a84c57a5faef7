use super::*;
use crate::Channel;
use crate::Guild;
use crate::ID;
use crate::Member;
use crate::Message;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Messenger that prints everything to stdout.
/// Message ids are handed out sequentially starting from 1.
#[derive(Debug, Default)]
pub struct Console {
    next: AtomicU64,
}

impl Console {
    fn allocate(&self) -> ID<Message> {
        ID::from(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait::async_trait]
impl Messenger for Console {
    async fn text(&self, channel: ID<Channel>, text: &str) -> Result<ID<Message>, DeliveryError> {
        let id = self.allocate();
        println!("#{} msg {}: {}", channel, id, text.trim_end());
        Ok(id)
    }
    async fn embed(&self, channel: ID<Channel>, embed: &Embed) -> Result<ID<Message>, DeliveryError> {
        let id = self.allocate();
        println!("#{} msg {}: {}", channel, id, embed);
        Ok(id)
    }
    async fn react(
        &self,
        channel: ID<Channel>,
        message: ID<Message>,
        emoji: &str,
    ) -> Result<(), DeliveryError> {
        log::debug!("[console] #{} msg {} +{}", channel, message, emoji);
        Ok(())
    }
    async fn mention(&self, _: ID<Guild>, member: ID<Member>) -> Result<String, DeliveryError> {
        Ok(format!("<@{}>", member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn ids_are_sequential() {
        let console = Console::default();
        let a = console.text(ID::from(1), "hello").await.unwrap();
        let b = console.embed(ID::from(1), &Embed::new("x", 0)).await.unwrap();
        assert_eq!(u64::from(a), 1);
        assert_eq!(u64::from(b), 2);
    }
    #[tokio::test]
    async fn mentions_member() {
        let console = Console::default();
        assert_eq!(
            console.mention(ID::from(1), ID::from(99)).await,
            Ok("<@99>".to_string())
        );
    }
}
