use super::*;
use crate::Channel;
use crate::Guild;
use crate::ID;
use crate::Member;
use crate::Message;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Something the bot sent, in the order it was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text {
        channel: ID<Channel>,
        id: ID<Message>,
        text: String,
    },
    Embed {
        channel: ID<Channel>,
        id: ID<Message>,
        embed: Embed,
    },
    Reaction {
        channel: ID<Channel>,
        message: ID<Message>,
        emoji: String,
    },
}

/// Messenger that keeps a transcript of everything sent.
///
/// Embed delivery can be switched off to simulate platform failures.
#[derive(Debug, Default)]
pub struct Recorder {
    log: Mutex<Vec<Outbound>>,
    failing: AtomicBool,
}

impl Recorder {
    /// Make every subsequent embed delivery fail (or succeed again).
    pub fn fail_embeds(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
    pub fn transcript(&self) -> Vec<Outbound> {
        self.lock().clone()
    }
    pub fn texts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
    pub fn embeds(&self) -> Vec<Embed> {
        self.lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Embed { embed, .. } => Some(embed.clone()),
                _ => None,
            })
            .collect()
    }
    pub fn reactions(&self, message: ID<Message>) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Reaction { message: m, emoji, .. } if *m == message => {
                    Some(emoji.clone())
                }
                _ => None,
            })
            .collect()
    }
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Outbound>> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
    fn record(&self, make: impl FnOnce(ID<Message>) -> Outbound) -> ID<Message> {
        let mut log = self.lock();
        let id = ID::from(log.len() as u64 + 1);
        log.push(make(id));
        id
    }
}

#[async_trait::async_trait]
impl Messenger for Recorder {
    async fn text(&self, channel: ID<Channel>, text: &str) -> Result<ID<Message>, DeliveryError> {
        Ok(self.record(|id| Outbound::Text {
            channel,
            id,
            text: text.to_string(),
        }))
    }
    async fn embed(&self, channel: ID<Channel>, embed: &Embed) -> Result<ID<Message>, DeliveryError> {
        match self.failing.load(Ordering::SeqCst) {
            true => Err(DeliveryError::Rejected("embeds disabled".into())),
            false => Ok(self.record(|id| Outbound::Embed {
                channel,
                id,
                embed: embed.clone(),
            })),
        }
    }
    async fn react(
        &self,
        channel: ID<Channel>,
        message: ID<Message>,
        emoji: &str,
    ) -> Result<(), DeliveryError> {
        self.record(|_| Outbound::Reaction {
            channel,
            message,
            emoji: emoji.to_string(),
        });
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
    async fn records_in_order() {
        let recorder = Recorder::default();
        let channel = ID::from(3);
        let text = recorder.text(channel, "hi").await.unwrap();
        let embed = recorder.embed(channel, &Embed::new("card", 0)).await.unwrap();
        recorder.react(channel, embed, "⬆️").await.unwrap();
        assert_ne!(text, embed);
        assert_eq!(recorder.texts(), vec!["hi".to_string()]);
        assert_eq!(recorder.embeds().len(), 1);
        assert_eq!(recorder.reactions(embed), vec!["⬆️".to_string()]);
        assert_eq!(recorder.transcript().len(), 3);
    }
    #[tokio::test]
    async fn failing_embeds() {
        let recorder = Recorder::default();
        recorder.fail_embeds(true);
        assert!(recorder.embed(ID::from(3), &Embed::new("card", 0)).await.is_err());
        assert!(recorder.text(ID::from(3), "still fine").await.is_ok());
        assert!(recorder.embeds().is_empty());
    }
}
