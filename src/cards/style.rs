use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Card art set used when rendering cards.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Style {
    #[default]
    Kenney,
    Pixel,
}

impl Style {
    pub const fn all() -> [Self; 2] {
        [Style::Kenney, Style::Pixel]
    }
    fn directory(&self) -> &'static str {
        match self {
            Style::Kenney => "kenney_cards_large",
            Style::Pixel => "pixel_cards",
        }
    }
    /// Relative path of the image for `card`, e.g.
    /// `card_images/kenney_cards_large/card_spades_A.png`.
    pub fn path(&self, card: &Card) -> String {
        let name = match card.suit() {
            Suit::RedJoker => "joker_red".to_string(),
            Suit::BlackJoker => "joker_black".to_string(),
            suit => format!("{}_{}", suit.to_string().to_lowercase(), Self::face(card.rank())),
        };
        format!("card_images/{}/card_{}.png", self.directory(), name)
    }
    /// Absolute URL of the image for `card` on `host`.
    pub fn url(&self, host: &str, card: &Card) -> String {
        format!("{}/{}", host.trim_end_matches('/'), self.path(card))
    }
    fn face(rank: Rank) -> String {
        match rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            number => format!("{:02}", u8::from(number)),
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Style {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|style| style.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown style: {}", s.trim()))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Style::Kenney => write!(f, "kenney"),
            Style::Pixel => write!(f, "pixel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn kenney_paths() {
        let ace = Card::try_from((Rank::Ace, Suit::Spades)).unwrap();
        let seven = Card::try_from((Rank::Seven, Suit::Hearts)).unwrap();
        assert_eq!(
            Style::Kenney.path(&ace),
            "card_images/kenney_cards_large/card_spades_A.png"
        );
        assert_eq!(
            Style::Kenney.path(&seven),
            "card_images/kenney_cards_large/card_hearts_07.png"
        );
    }
    #[test]
    fn joker_paths() {
        assert_eq!(
            Style::Pixel.path(&Card::red_joker()),
            "card_images/pixel_cards/card_joker_red.png"
        );
    }
    #[test]
    fn url_joins_host() {
        let ten = Card::try_from((Rank::Ten, Suit::Clubs)).unwrap();
        assert_eq!(
            Style::Kenney.url("http://localhost:8080/", &ten),
            "http://localhost:8080/card_images/kenney_cards_large/card_clubs_10.png"
        );
    }
    #[test]
    fn parses_names() {
        assert_eq!(Style::try_from("Pixel"), Ok(Style::Pixel));
        assert_eq!(Style::try_from("kenney"), Ok(Style::Kenney));
        assert!(Style::try_from("watercolour").is_err());
    }
}
