use crate::DOWN;
use crate::UP;
use crate::cards::Card;
use std::cmp::Ordering;

/// A participant's guess for the upcoming card.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Choice {
    #[default]
    None,
    High,
    Low,
}

impl Choice {
    /// The correct guess going from `previous` to `next`, or `None` on a tie.
    pub fn between(previous: &Card, next: &Card) -> Option<Self> {
        match next.value().cmp(&previous.value()) {
            Ordering::Greater => Some(Choice::High),
            Ordering::Less => Some(Choice::Low),
            Ordering::Equal => None,
        }
    }
    /// Maps the guess reactions; every other symbol is not a guess.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            UP => Some(Choice::High),
            DOWN => Some(Choice::Low),
            _ => None,
        }
    }
    pub fn is_none(&self) -> bool {
        *self == Choice::None
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::None => write!(f, "no guess"),
            Choice::High => write!(f, "higher"),
            Choice::Low => write!(f, "lower"),
        }
    }
}
