/// Face value of a card. Ace is low, so ranks compare as 1 through 13.
/// Jokers carry their own rank below Ace.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    Joker = 0,
    #[default]
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// The thirteen standard ranks, Ace to King.
    pub const fn standard() -> [Self; 13] {
        [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
    pub fn is_joker(&self) -> bool {
        *self == Rank::Joker
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Rank {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Rank::Joker),
            1..=13 => Ok(Self::standard()[n as usize - 1]),
            _ => Err(format!("invalid rank u8: {}", n)),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rank::Joker => write!(f, "Joker"),
            Rank::Ace => write!(f, "Ace"),
            Rank::Jack => write!(f, "Jack"),
            Rank::Queen => write!(f, "Queen"),
            Rank::King => write!(f, "King"),
            number => write!(f, "{}", u8::from(*number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(Ok(rank) == Rank::try_from(u8::from(rank)));
    }
    #[test]
    fn rejects_out_of_range() {
        assert!(Rank::try_from(14).is_err());
    }
    #[test]
    fn ace_is_low() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
    }
    #[test]
    fn names() {
        assert_eq!(Rank::Ace.to_string(), "Ace");
        assert_eq!(Rank::Seven.to_string(), "7");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Queen.to_string(), "Queen");
        assert_eq!(Rank::Joker.to_string(), "Joker");
    }
}
