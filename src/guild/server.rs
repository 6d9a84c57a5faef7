use super::*;
use crate::Guild;
use crate::ID;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Style;
use crate::highlow::Session;

/// Everything the bot knows about one guild.
#[derive(Debug)]
pub struct ServerState {
    pub id: ID<Guild>,
    pub deck: Deck,
    pub session: Session,
    pub settings: Settings,
}

impl ServerState {
    /// A guild seen for the first time: fresh standard deck, default settings.
    pub fn new(id: ID<Guild>) -> Self {
        let settings = Settings::default();
        Self {
            id,
            deck: Deck::new(settings.jokers),
            session: Session::default(),
            settings,
        }
    }
    /// A fresh, unshuffled deck honouring the joker setting.
    pub fn fresh_deck(&self) -> Deck {
        Deck::new(self.settings.jokers)
    }
    /// Returns to idle after a game and puts a fresh deck in play.
    pub fn finish(&mut self) {
        self.session.close();
        self.deck = self.fresh_deck();
    }
}

/// Deck commands. All of them are refused while a game is running.
impl ServerState {
    fn idle(&self) -> Result<(), Refusal> {
        match self.session.is_active() {
            true => Err(Refusal::InProgress),
            false => Ok(()),
        }
    }
    /// Draws the top card, returning it with the number of cards left.
    pub fn draw(&mut self) -> Result<(Card, usize), Refusal> {
        self.idle()?;
        let card = self.deck.draw().ok_or(Refusal::DeckEmpty)?;
        log::debug!("[guild {}] drew {}", self.id, card);
        Ok((card, self.deck.size()))
    }
    pub fn shuffle(&mut self) -> Result<(), Refusal> {
        self.idle()?;
        self.deck.shuffle();
        Ok(())
    }
    pub fn reset(&mut self) -> Result<(), Refusal> {
        self.idle()?;
        self.deck = self.fresh_deck();
        Ok(())
    }
    /// Toggling jokers replaces the deck.
    pub fn set_jokers(&mut self, jokers: bool) -> Result<(), Refusal> {
        self.idle()?;
        self.settings.jokers = jokers;
        self.deck = self.fresh_deck();
        Ok(())
    }
    /// Art style only affects rendering, so it may change mid-game.
    pub fn set_style(&mut self, style: Style) {
        self.settings.style = style;
    }
    /// Stops the running game, if any.
    pub fn quit(&mut self) -> Result<(), Refusal> {
        match self.session.is_active() {
            true => {
                log::info!("[guild {}] game stopped", self.id);
                self.finish();
                Ok(())
            }
            false => Err(Refusal::NoGame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild() -> ServerState {
        ServerState::new(ID::from(1))
    }

    #[test]
    fn starts_with_standard_deck() {
        let state = guild();
        assert_eq!(state.deck.size(), 52);
        assert!(!state.session.is_active());
        assert_eq!(state.settings, Settings::default());
    }
    #[test]
    fn draw_reports_remaining() {
        let mut state = guild();
        let (card, left) = state.draw().unwrap();
        assert_eq!(card.to_string(), "King of Spades");
        assert_eq!(left, 51);
    }
    #[test]
    fn draw_from_empty_deck() {
        let mut state = guild();
        state.deck = Deck::from(Vec::<Card>::new());
        assert_eq!(state.draw(), Err(Refusal::DeckEmpty));
    }
    #[test]
    fn jokers_replace_the_deck() {
        let mut state = guild();
        state.draw().unwrap();
        state.set_jokers(true).unwrap();
        assert_eq!(state.deck.size(), 54);
        state.reset().unwrap();
        assert_eq!(state.deck.size(), 54);
        state.set_jokers(false).unwrap();
        assert_eq!(state.deck.size(), 52);
    }
    #[test]
    fn deck_commands_refused_during_game() {
        let mut state = guild();
        state.session.begin(ID::from(2));
        assert_eq!(state.draw(), Err(Refusal::InProgress));
        assert_eq!(state.shuffle(), Err(Refusal::InProgress));
        assert_eq!(state.reset(), Err(Refusal::InProgress));
        assert_eq!(state.set_jokers(true), Err(Refusal::InProgress));
        state.set_style(Style::Pixel);
        assert_eq!(state.settings.style, Style::Pixel);
    }
    #[test]
    fn quit_requires_a_game() {
        let mut state = guild();
        assert_eq!(state.quit(), Err(Refusal::NoGame));
        let token = state.session.begin(ID::from(2));
        state.deck.draw();
        assert_eq!(state.quit(), Ok(()));
        assert!(token.is_cancelled());
        assert!(!state.session.is_active());
        assert_eq!(state.deck.size(), 52);
    }
}
