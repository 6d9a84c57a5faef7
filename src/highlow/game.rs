use super::announcement;
use super::announcement::Announcement;
use super::round::Outcome;
use super::timer::Timing;
use crate::Channel;
use crate::DOWN;
use crate::Guild;
use crate::ID;
use crate::JOIN;
use crate::Member;
use crate::UP;
use crate::cards::Card;
use crate::cards::Deck;
use crate::guild::Refusal;
use crate::guild::Shared;
use crate::messenger::Messenger;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Where the loop goes after a round is settled.
enum Step {
    Continue(Card),
    Finish(Card),
    Abort,
}

/// The task that drives one High-or-Low session through its timed phases.
///
/// The guild lock is taken for each state transition and released before
/// every wait and every platform call, so reactions keep flowing while the
/// loop sleeps. The session's cancellation token is checked each time the
/// lock is taken; once cancelled the loop leaves the guild state alone,
/// since whoever cancelled it already reset it (and a new game may be
/// running by then).
pub struct Game {
    guild: ID<Guild>,
    channel: ID<Channel>,
    state: Shared,
    messenger: Arc<dyn Messenger>,
    timing: Timing,
    host: Arc<str>,
    token: CancellationToken,
}

impl Game {
    /// Opens a session in `channel`, posts the join prompt and spawns the
    /// loop task. Refused if the guild already has a game running.
    pub async fn start(
        guild: ID<Guild>,
        channel: ID<Channel>,
        state: Shared,
        messenger: Arc<dyn Messenger>,
        timing: Timing,
        host: Arc<str>,
    ) -> Result<JoinHandle<()>, Refusal> {
        let token = {
            let mut server = state.lock().await;
            if server.session.is_active() {
                return Err(Refusal::InProgress);
            }
            let mut deck = Deck::new(false);
            deck.shuffle();
            server.deck = deck;
            server.session.begin(channel)
        };
        log::info!("[highlow {}] starting in channel {}", guild, channel);
        let prompt = match messenger
            .embed(channel, &announcement::invitation(timing.join))
            .await
        {
            Ok(prompt) => prompt,
            Err(e) => {
                log::warn!("[highlow {}] join prompt failed: {}", guild, e);
                let mut server = state.lock().await;
                if !token.is_cancelled() {
                    server.finish();
                }
                return Err(Refusal::StartFailed(e));
            }
        };
        {
            let mut server = state.lock().await;
            if !token.is_cancelled() {
                server.session.show(prompt);
            }
        }
        if let Err(e) = messenger.react(channel, prompt, JOIN).await {
            log::warn!("[highlow {}] join reaction failed: {}", guild, e);
        }
        let game = Self {
            guild,
            channel,
            state,
            messenger,
            timing,
            host,
            token,
        };
        Ok(tokio::spawn(game.run()))
    }

    async fn run(self) {
        tokio::time::sleep(self.timing.join).await;
        let Some(mut card) = self.open().await else {
            return;
        };
        loop {
            if !self.prompt(&card).await {
                return;
            }
            tokio::time::sleep(self.timing.guess).await;
            match self.resolve(card).await {
                Step::Continue(next) => card = next,
                Step::Finish(last) => return self.conclude(last).await,
                Step::Abort => return,
            }
        }
    }

    /// Closes the join window and turns over the reference card.
    async fn open(&self) -> Option<Card> {
        let opening = {
            let mut server = self.state.lock().await;
            if self.aborted() {
                return None;
            }
            server.session.close_joining();
            let joined = server.session.players().len();
            let card = match joined {
                0 => None,
                _ => server.deck.draw(),
            };
            match card {
                Some(card) => {
                    log::info!("[highlow {}] {} players joined", self.guild, joined);
                    Ok(card)
                }
                None => {
                    server.finish();
                    Err(match joined {
                        0 => Announcement::Nobody,
                        _ => Announcement::Exhausted,
                    })
                }
            }
        };
        match opening {
            Ok(card) => Some(card),
            Err(announcement) => {
                self.say(announcement).await;
                None
            }
        }
    }

    /// Shows `card` and points reaction ingestion at the new prompt.
    /// Returns false when the loop must stop.
    async fn prompt(&self, card: &Card) -> bool {
        let embed = {
            let server = self.state.lock().await;
            if self.aborted() {
                return false;
            }
            announcement::showing(
                card,
                server.deck.size(),
                server.settings.style.url(&self.host, card),
            )
        };
        let prompt = match self.messenger.embed(self.channel, &embed).await {
            Ok(prompt) => prompt,
            Err(e) => {
                log::warn!("[highlow {}] round prompt failed: {}", self.guild, e);
                {
                    let mut server = self.state.lock().await;
                    if self.aborted() {
                        return false;
                    }
                    server.finish();
                }
                self.say(Announcement::Broken).await;
                return false;
            }
        };
        {
            let mut server = self.state.lock().await;
            if self.aborted() {
                return false;
            }
            server.session.show(prompt);
        }
        for emoji in [UP, DOWN] {
            if let Err(e) = self.messenger.react(self.channel, prompt, emoji).await {
                log::warn!("[highlow {}] guess reaction failed: {}", self.guild, e);
            }
        }
        true
    }

    /// Turns over the next card and settles the round.
    async fn resolve(&self, previous: Card) -> Step {
        let (outcome, next, remaining, exhausted) = {
            let mut server = self.state.lock().await;
            if self.aborted() {
                return Step::Abort;
            }
            let Some(next) = server.deck.draw() else {
                drop(server);
                self.say(Announcement::Exhausted).await;
                return Step::Finish(previous);
            };
            let outcome = server.session.resolve(&previous, &next);
            let remaining = server.session.survivors().len();
            log::debug!(
                "[highlow {}] {} -> {}: {:?}",
                self.guild,
                previous,
                next,
                outcome
            );
            (outcome, next, remaining, server.deck.is_empty())
        };
        let announcement = match outcome {
            Outcome::Tie => Announcement::Draw,
            Outcome::Decided {
                correct,
                reverted: true,
                ..
            } => Announcement::Round {
                card: next,
                correct,
                eliminated: Vec::new(),
            },
            Outcome::Decided {
                correct,
                eliminated,
                ..
            } => Announcement::Round {
                card: next,
                correct,
                eliminated: self.mentions(eliminated).await,
            },
        };
        self.say(announcement).await;
        if remaining == 0 {
            return Step::Finish(next);
        }
        if exhausted {
            self.say(Announcement::Exhausted).await;
            return Step::Finish(next);
        }
        Step::Continue(next)
    }

    /// Shows the last card, names the winners and returns the guild to idle.
    async fn conclude(&self, last: Card) {
        let (embed, rounds, winners) = {
            let mut server = self.state.lock().await;
            if self.aborted() {
                return;
            }
            let embed = announcement::last(
                &last,
                server.deck.size(),
                server.settings.style.url(&self.host, &last),
            );
            let rounds = server.session.rounds();
            let winners = server.session.survivors();
            server.finish();
            (embed, rounds, winners)
        };
        log::info!(
            "[highlow {}] game over after {} rounds, {} winners",
            self.guild,
            rounds,
            winners.len()
        );
        if let Err(e) = self.messenger.embed(self.channel, &embed).await {
            log::warn!("[highlow {}] final card failed: {}", self.guild, e);
        }
        let winners = self.mentions(winners).await;
        self.say(Announcement::Winners { rounds, winners }).await;
    }

    fn aborted(&self) -> bool {
        if self.token.is_cancelled() {
            log::info!("[highlow {}] game was stopped", self.guild);
            return true;
        }
        false
    }

    /// Members who cannot be resolved are left out.
    async fn mentions(&self, members: Vec<ID<Member>>) -> Vec<String> {
        let mut names = Vec::with_capacity(members.len());
        for member in members {
            match self.messenger.mention(self.guild, member).await {
                Ok(name) => names.push(name),
                Err(e) => log::debug!("[highlow {}] skipping {}: {}", self.guild, member, e),
            }
        }
        names
    }

    async fn say(&self, announcement: Announcement) {
        if let Err(e) = self
            .messenger
            .text(self.channel, &announcement.to_string())
            .await
        {
            log::warn!("[highlow {}] announcement failed: {}", self.guild, e);
        }
    }
}
