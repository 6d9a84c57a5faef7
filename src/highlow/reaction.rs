use super::choice::Choice;
use super::session::Session;
use crate::Channel;
use crate::Guild;
use crate::ID;
use crate::JOIN;
use crate::Member;
use crate::Message;

/// A reaction-add event delivered by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub guild: ID<Guild>,
    pub channel: ID<Channel>,
    pub message: ID<Message>,
    pub member: ID<Member>,
    pub emoji: String,
}

/// What a reaction did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    Ignored,
    Joined,
    Guessed(Choice),
}

impl Session {
    /// Applies a reaction. Only reactions on the current prompt, in the
    /// bound channel, from someone other than the bot (`me`) count.
    pub fn ingest(&mut self, reaction: &Reaction, me: ID<Member>) -> Ingested {
        if !self.is_active()
            || self.channel() != Some(reaction.channel)
            || self.prompt() != Some(reaction.message)
            || reaction.member == me
        {
            return Ingested::Ignored;
        }
        match reaction.emoji.as_str() {
            JOIN if self.pre_phase() => match self.join(reaction.member) {
                true => Ingested::Joined,
                false => Ingested::Ignored,
            },
            emoji => match Choice::from_emoji(emoji) {
                Some(choice) if self.guess(reaction.member, choice) => Ingested::Guessed(choice),
                _ => Ingested::Ignored,
            },
        }
    }
}
