use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered stack of cards. The top of the deck is the end of the vector.
///
/// A deck only ever shrinks. Resetting means building a new one with
/// [`Deck::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Deck {
    /// Creates a fresh, unshuffled 52-card deck, or 54 with both jokers.
    /// Cards run Clubs, Diamonds, Hearts, Spades, each Ace to King, then jokers.
    pub fn new(jokers: bool) -> Self {
        let standard = Suit::standard()
            .into_iter()
            .flat_map(|suit| Rank::standard().into_iter().map(move |rank| (rank, suit)))
            .filter_map(|pair| Card::try_from(pair).ok());
        let wild = Suit::jokers()
            .into_iter()
            .filter(|_| jokers)
            .map(|suit| (Rank::Joker, suit))
            .filter_map(|pair| Card::try_from(pair).ok());
        Self(standard.chain(wild).collect())
    }
    /// Number of cards left.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Removes the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Uniform in-place permutation of the remaining cards.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }
    /// Same as [`Deck::shuffle`] with a caller-supplied source of randomness.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }
    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

/// Cards listed bottom first, so the last element is drawn first.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn sorted(deck: &Deck) -> Vec<(u8, u8)> {
        let mut cards = deck
            .cards()
            .iter()
            .map(|c| (u8::from(c.suit()), c.value()))
            .collect::<Vec<_>>();
        cards.sort();
        cards
    }

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let deck = Deck::new(false);
        assert_eq!(deck.size(), 52);
        assert_eq!(deck.cards().iter().collect::<HashSet<_>>().len(), 52);
        assert!(deck.cards().iter().all(|c| !c.is_joker()));
    }
    #[test]
    fn joker_deck_has_54_cards() {
        let deck = Deck::new(true);
        assert_eq!(deck.size(), 54);
        assert_eq!(deck.cards().iter().filter(|c| c.is_joker()).count(), 2);
    }
    #[test]
    fn fresh_deck_order() {
        let mut deck = Deck::new(false);
        assert_eq!(deck.cards()[0].to_string(), "Ace of Clubs");
        assert_eq!(deck.draw().map(|c| c.to_string()), Some("King of Spades".into()));
        let mut deck = Deck::new(true);
        assert_eq!(deck.draw(), Some(Card::black_joker()));
        assert_eq!(deck.draw(), Some(Card::red_joker()));
    }
    #[test]
    fn size_after_draws() {
        let mut deck = Deck::new(false);
        for n in 1..=60 {
            let drawn = deck.draw();
            assert_eq!(deck.size(), 52usize.saturating_sub(n));
            assert_eq!(drawn.is_some(), n <= 52);
        }
    }
    #[test]
    fn fifty_third_draw_is_empty() {
        let mut deck = Deck::new(false);
        assert_eq!(deck.by_ref().count(), 52);
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }
    #[test]
    fn shuffle_preserves_cards() {
        let mut deck = Deck::new(true);
        let before = sorted(&deck);
        deck.shuffle();
        assert_eq!(sorted(&deck), before);
        assert_eq!(deck.size(), 54);
    }
    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = Deck::new(false);
        let mut b = Deck::new(false);
        a.shuffle_with(&mut SmallRng::seed_from_u64(42));
        b.shuffle_with(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_ne!(a, Deck::new(false));
    }
    #[test]
    fn shuffle_tiny_decks() {
        let mut empty = Deck::from(Vec::<Card>::new());
        empty.shuffle();
        assert!(empty.is_empty());
        let ace = Card::try_from((Rank::Ace, Suit::Hearts)).unwrap();
        let mut single = Deck::from(vec![ace]);
        single.shuffle();
        assert_eq!(single.draw(), Some(ace));
    }
    #[test]
    fn draws_from_the_end() {
        let low = Card::try_from((Rank::Two, Suit::Clubs)).unwrap();
        let high = Card::try_from((Rank::King, Suit::Clubs)).unwrap();
        let mut deck = Deck::from(vec![low, high]);
        assert_eq!(deck.draw(), Some(high));
        assert_eq!(deck.draw(), Some(low));
        assert_eq!(deck.draw(), None);
    }
}
