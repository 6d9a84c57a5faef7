use super::choice::Choice;
use super::player::PlayerState;
use super::round::Outcome;
use crate::Channel;
use crate::ID;
use crate::Member;
use crate::Message;
use crate::cards::Card;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

/// Which game a guild is running.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    #[default]
    Idle,
    HighOrLow,
}

/// Where a running session is in its lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Join window open; the prompt collects join reactions.
    Joining,
    /// A card is showing; the prompt collects guesses.
    Guessing,
    /// The next card is being turned over.
    Resolving,
}

/// High-or-Low state for one guild.
///
/// At most one exists per guild. Closing a session (naturally, by quit or
/// after a failure) cancels its token, which is how the loop task that owns
/// the timed phases learns it should stop at its next checkpoint.
#[derive(Debug, Default)]
pub struct Session {
    kind: Kind,
    phase: Phase,
    channel: Option<ID<Channel>>,
    prompt: Option<ID<Message>>,
    players: HashMap<ID<Member>, PlayerState>,
    rounds: usize,
    token: CancellationToken,
}

impl Session {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_active(&self) -> bool {
        self.kind != Kind::Idle
    }
    pub fn pre_phase(&self) -> bool {
        self.phase == Phase::Joining
    }
    pub fn channel(&self) -> Option<ID<Channel>> {
        self.channel
    }
    pub fn prompt(&self) -> Option<ID<Message>> {
        self.prompt
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn players(&self) -> &HashMap<ID<Member>, PlayerState> {
        &self.players
    }
    pub fn player(&self, member: ID<Member>) -> Option<&PlayerState> {
        self.players.get(&member)
    }
    /// Members still in the game, in id order.
    pub fn survivors(&self) -> Vec<ID<Member>> {
        let mut survivors = self
            .players
            .iter()
            .filter(|(_, p)| p.active())
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        survivors.sort();
        survivors
    }
}

impl Session {
    /// Opens a High-or-Low session bound to `channel` with the join window
    /// open. Returns the token the loop task watches.
    pub fn begin(&mut self, channel: ID<Channel>) -> CancellationToken {
        self.close();
        self.kind = Kind::HighOrLow;
        self.phase = Phase::Joining;
        self.channel = Some(channel);
        self.token.clone()
    }
    /// Ends the session and returns to idle, cancelling its loop task.
    pub fn close(&mut self) {
        self.token.cancel();
        *self = Self::default();
    }
    /// Records the message whose reactions count from now on. Outside the
    /// join window this starts a new round, so every guess is cleared.
    pub fn show(&mut self, prompt: ID<Message>) {
        self.prompt = Some(prompt);
        if self.phase != Phase::Joining {
            self.phase = Phase::Guessing;
            self.players.values_mut().for_each(PlayerState::clear);
        }
    }
    /// Closes the join window.
    pub fn close_joining(&mut self) {
        self.phase = Phase::Guessing;
    }
    /// Adds a participant during the join window. Joining twice is a no-op.
    pub fn join(&mut self, member: ID<Member>) -> bool {
        match self.pre_phase() && !self.players.contains_key(&member) {
            true => {
                self.players.insert(member, PlayerState::default());
                true
            }
            false => false,
        }
    }
    /// Records a guess; unknown, eliminated or already-guessed members are ignored.
    pub fn guess(&mut self, member: ID<Member>, choice: Choice) -> bool {
        match self.phase {
            Phase::Guessing => self
                .players
                .get_mut(&member)
                .is_some_and(|p| p.guess(choice)),
            _ => false,
        }
    }
    /// Turns over `next` against `previous` and settles the round.
    /// Only decided rounds count towards the round total.
    pub fn resolve(&mut self, previous: &Card, next: &Card) -> Outcome {
        self.phase = Phase::Resolving;
        let outcome = Outcome::judge(&mut self.players, previous, next);
        if !outcome.is_tie() {
            self.rounds += 1;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn card(rank: Rank) -> Card {
        Card::try_from((rank, Suit::Clubs)).unwrap()
    }
    fn member(n: u64) -> ID<Member> {
        ID::from(n)
    }
    fn started() -> Session {
        let mut session = Session::default();
        session.begin(ID::from(10));
        session.show(ID::from(100));
        session
    }

    #[test]
    fn default_is_idle() {
        let session = Session::default();
        assert_eq!(session.kind(), Kind::Idle);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_active());
    }
    #[test]
    fn begin_opens_join_window() {
        let session = started();
        assert_eq!(session.kind(), Kind::HighOrLow);
        assert!(session.pre_phase());
        assert_eq!(session.channel(), Some(ID::from(10)));
        assert_eq!(session.prompt(), Some(ID::from(100)));
    }
    #[test]
    fn join_is_idempotent() {
        let mut session = started();
        assert!(session.join(member(1)));
        assert!(!session.join(member(1)));
        assert_eq!(session.players().len(), 1);
    }
    #[test]
    fn no_joining_after_window() {
        let mut session = started();
        session.close_joining();
        assert!(!session.join(member(1)));
    }
    #[test]
    fn no_guessing_during_window() {
        let mut session = started();
        session.join(member(1));
        assert!(!session.guess(member(1), Choice::High));
    }
    #[test]
    fn no_guessing_while_resolving() {
        let mut session = started();
        session.join(member(1));
        session.close_joining();
        session.resolve(&card(Rank::Seven), &card(Rank::Seven));
        assert_eq!(session.phase(), Phase::Resolving);
        assert!(!session.guess(member(1), Choice::High));
        session.show(ID::from(101));
        assert!(session.guess(member(1), Choice::High));
    }
    #[test]
    fn unknown_members_cannot_guess() {
        let mut session = started();
        session.close_joining();
        assert!(!session.guess(member(9), Choice::High));
    }
    #[test]
    fn new_round_clears_guesses() {
        let mut session = started();
        session.join(member(1));
        session.close_joining();
        assert!(session.guess(member(1), Choice::High));
        session.show(ID::from(101));
        assert_eq!(session.player(member(1)).map(|p| p.choice()), Some(Choice::None));
        assert_eq!(session.phase(), Phase::Guessing);
    }
    #[test]
    fn ties_do_not_count_as_rounds() {
        let mut session = started();
        session.join(member(1));
        session.close_joining();
        session.guess(member(1), Choice::Low);
        assert!(session.resolve(&card(Rank::Seven), &card(Rank::Seven)).is_tie());
        assert_eq!(session.rounds(), 0);
        session.show(ID::from(101));
        assert!(session.guess(member(1), Choice::Low));
        session.resolve(&card(Rank::Seven), &card(Rank::Three));
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.survivors(), vec![member(1)]);
    }
    #[test]
    fn close_cancels_token_and_resets() {
        let mut session = started();
        let token = session.begin(ID::from(10));
        session.join(member(1));
        session.close();
        assert!(token.is_cancelled());
        assert!(!session.is_active());
        assert!(session.players().is_empty());
        assert_eq!(session.channel(), None);
    }
    #[test]
    fn restarting_issues_a_fresh_token() {
        let mut session = Session::default();
        let first = session.begin(ID::from(10));
        let second = session.begin(ID::from(10));
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }
}
