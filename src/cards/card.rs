use super::rank::Rank;
use super::suit::Color;
use super::suit::Suit;

/// An immutable playing card.
///
/// Standard ranks only pair with the four standard suits and the joker rank
/// only pairs with the two joker suits. Construction goes through
/// [`TryFrom<(Rank, Suit)>`] or the joker constructors, so a `Card` that
/// exists always satisfies that pairing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn color(&self) -> Color {
        self.suit.color()
    }
    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
    /// Numeric value used for higher/lower comparisons (Ace = 1, jokers = 0).
    pub fn value(&self) -> u8 {
        u8::from(self.rank)
    }
    pub const fn red_joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: Suit::RedJoker,
        }
    }
    pub const fn black_joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: Suit::BlackJoker,
        }
    }
}

/// (Rank, Suit) isomorphism, partial over the joker pairing
impl TryFrom<(Rank, Suit)> for Card {
    type Error = String;
    fn try_from((rank, suit): (Rank, Suit)) -> Result<Self, Self::Error> {
        match rank.is_joker() == suit.is_joker() {
            true => Ok(Self { rank, suit }),
            false => Err(format!("{:?} cannot pair with {:?}", rank, suit)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.is_joker() {
            true => write!(f, "{}", self.suit),
            false => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}
