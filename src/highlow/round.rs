use super::choice::Choice;
use super::player::PlayerState;
use crate::ID;
use crate::Member;
use crate::cards::Card;
use std::collections::HashMap;

/// What happened when a round's card was turned over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Same rank as before: nobody is eliminated.
    Tie,
    /// The card went `correct`. `eliminated` lists everyone who guessed
    /// otherwise (or not at all); `reverted` is set when that would have been
    /// every remaining player, in which case they all stay in.
    Decided {
        correct: Choice,
        eliminated: Vec<ID<Member>>,
        reverted: bool,
    },
}

impl Outcome {
    /// Settles one round in place and clears every guess.
    pub fn judge(
        players: &mut HashMap<ID<Member>, PlayerState>,
        previous: &Card,
        next: &Card,
    ) -> Self {
        let standing = players.values().filter(|p| p.active()).count();
        let outcome = match Choice::between(previous, next) {
            None => Outcome::Tie,
            Some(correct) => {
                let mut eliminated = players
                    .iter_mut()
                    .filter(|(_, p)| p.active())
                    .filter(|(_, p)| p.choice() != correct)
                    .map(|(id, p)| {
                        p.eliminate();
                        *id
                    })
                    .collect::<Vec<_>>();
                eliminated.sort();
                let reverted = !eliminated.is_empty() && eliminated.len() >= standing;
                if reverted {
                    for id in &eliminated {
                        if let Some(player) = players.get_mut(id) {
                            player.restore();
                        }
                    }
                }
                Outcome::Decided {
                    correct,
                    eliminated,
                    reverted,
                }
            }
        };
        players.values_mut().for_each(PlayerState::clear);
        outcome
    }
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}
