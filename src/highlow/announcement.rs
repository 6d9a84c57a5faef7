use super::choice::Choice;
use crate::GAME_COLOR;
use crate::JOIN;
use crate::cards::Card;
use crate::messenger::Embed;
use std::time::Duration;

/// Plain-text messages the game posts while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// The join window closed empty.
    Nobody,
    /// Tie round.
    Draw,
    /// A decided round, with the mentions of everyone eliminated.
    Round {
        card: Card,
        correct: Choice,
        eliminated: Vec<String>,
    },
    /// The deck ran out mid-game.
    Exhausted,
    /// The game is over.
    Winners { rounds: usize, winners: Vec<String> },
    /// A round prompt could not be delivered.
    Broken,
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Announcement::Nobody => write!(f, "Nobody joined!"),
            Announcement::Draw => write!(f, "Draw! Nobody was eliminated."),
            Announcement::Round {
                card,
                correct,
                eliminated,
            } => {
                writeln!(f, "{}. The next card was {}!", card, correct)?;
                match eliminated.is_empty() {
                    true => write!(f, "No players eliminated."),
                    false => write!(f, "Players eliminated this round: {}", eliminated.join(" ")),
                }
            }
            Announcement::Exhausted => write!(f, "No more cards left!"),
            Announcement::Winners { rounds, winners } => {
                writeln!(
                    f,
                    "Game end! Congrats to the following players who lasted the most rounds! ({} {})",
                    rounds,
                    if *rounds == 1 { "round" } else { "rounds" }
                )?;
                write!(f, "{}", winners.join(" "))
            }
            Announcement::Broken => write!(f, "Error found while running the game. Exiting..."),
        }
    }
}

/// The message members react to in order to join.
pub fn invitation(join: Duration) -> Embed {
    Embed::new("High or Low", GAME_COLOR)
        .description(format!(
            "Guess whether the next card will be higher or lower.\nReact with {} to join.\nOnly your first reaction in each round will be counted, so choose carefully!",
            JOIN
        ))
        .footer(format!("Game starting in {} seconds...", join.as_secs()))
}

/// The card currently showing, which members guess against.
pub fn showing(card: &Card, remaining: usize, image: String) -> Embed {
    Embed::new(card.to_string(), GAME_COLOR)
        .footer(format!("{} cards remaining.", remaining))
        .image(image)
}

/// The card the game ended on.
pub fn last(card: &Card, remaining: usize, image: String) -> Embed {
    Embed::new(format!("Last card drawn: {}", card), GAME_COLOR)
        .footer(format!("{} cards remained.", remaining))
        .image(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    #[test]
    fn round_with_eliminations() {
        let card = Card::try_from((Rank::Three, Suit::Hearts)).unwrap();
        let text = Announcement::Round {
            card,
            correct: Choice::Low,
            eliminated: vec!["<@1>".into(), "<@3>".into()],
        }
        .to_string();
        assert_eq!(
            text,
            "3 of Hearts. The next card was lower!\nPlayers eliminated this round: <@1> <@3>"
        );
    }
    #[test]
    fn round_without_eliminations() {
        let card = Card::try_from((Rank::King, Suit::Spades)).unwrap();
        let text = Announcement::Round {
            card,
            correct: Choice::High,
            eliminated: vec![],
        }
        .to_string();
        assert!(text.ends_with("higher!\nNo players eliminated."));
    }
    #[test]
    fn winners_singular_and_plural() {
        let one = Announcement::Winners {
            rounds: 1,
            winners: vec!["<@2>".into()],
        };
        let many = Announcement::Winners {
            rounds: 4,
            winners: vec!["<@2>".into(), "<@5>".into()],
        };
        assert!(one.to_string().contains("(1 round)\n<@2>"));
        assert!(many.to_string().contains("(4 rounds)\n<@2> <@5>"));
    }
    #[test]
    fn invitation_mentions_window() {
        let embed = invitation(Duration::from_secs(7));
        assert_eq!(embed.footer.as_deref(), Some("Game starting in 7 seconds..."));
        assert!(embed.description.unwrap_or_default().contains(JOIN));
    }
}
