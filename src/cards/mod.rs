//! Playing cards.
//!
//! - [`Card`] — An immutable `(Rank, Suit)` pair, jokers included
//! - [`Deck`] — A stack of cards drawn from the top
//! - [`Style`] — Which art set renders a card, and where its image lives
mod card;
mod deck;
mod rank;
mod style;
mod suit;

pub use card::*;
pub use deck::*;
pub use rank::*;
pub use style::*;
pub use suit::*;
