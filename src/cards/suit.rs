/// One of the four standard suits, or the suit slot of a joker.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
    RedJoker = 4,
    BlackJoker = 5,
}

/// Card colour, derived from the suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    /// The four suits a standard deck is built from, in deck order.
    pub const fn standard() -> [Self; 4] {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    }
    pub const fn jokers() -> [Self; 2] {
        [Suit::RedJoker, Suit::BlackJoker]
    }
    pub fn is_joker(&self) -> bool {
        matches!(self, Suit::RedJoker | Suit::BlackJoker)
    }
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades | Suit::BlackJoker => Color::Black,
            Suit::Diamonds | Suit::Hearts | Suit::RedJoker => Color::Red,
        }
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::Clubs),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            4 => Ok(Suit::RedJoker),
            5 => Ok(Suit::BlackJoker),
            _ => Err(format!("invalid suit u8: {}", n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism, case-insensitive on the long names
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().replace(' ', "_").as_str() {
            "CLUBS" => Ok(Suit::Clubs),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            "RED_JOKER" => Ok(Suit::RedJoker),
            "BLACK_JOKER" => Ok(Suit::BlackJoker),
            _ => Err(format!("unknown suit: {}", s.trim())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "Clubs",
                Suit::Diamonds => "Diamonds",
                Suit::Hearts => "Hearts",
                Suit::Spades => "Spades",
                Suit::RedJoker => "Red Joker",
                Suit::BlackJoker => "Black Joker",
            }
        )
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::Red => write!(f, "Red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Suit::try_from("hearts"), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from("Red Joker"), Ok(Suit::RedJoker));
        assert_eq!(Suit::try_from(" black_joker "), Ok(Suit::BlackJoker));
    }
    #[test]
    fn rejects_unknown_names() {
        assert!(Suit::try_from("cups").is_err());
    }
    #[test]
    fn colors() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::RedJoker.color(), Color::Red);
        assert_eq!(Suit::BlackJoker.color(), Color::Black);
    }
    #[test]
    fn joker_suits() {
        assert!(Suit::jokers().iter().all(Suit::is_joker));
        assert!(!Suit::standard().iter().any(Suit::is_joker));
        assert_eq!(Suit::jokers(), [Suit::RedJoker, Suit::BlackJoker]);
    }
    #[test]
    fn bijective_u8() {
        let suit = Suit::Hearts;
        assert!(Ok(suit) == Suit::try_from(u8::from(suit)));
    }
}
