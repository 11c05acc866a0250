//! Errors surfaced by the card model and the evaluation engine.

use thiserror::Error;

use crate::card::Card;
use crate::player::PlayerId;

/// Errors that can occur while building cards, dealing or evaluating hands.
///
/// Every variant is recoverable by the caller: malformed input should be
/// rejected, an empty deck ends the round, and the duplicate variants signal a
/// corrupted round that must not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokerError {
    #[error("invalid card value given: {0}")]
    InvalidCard(u8),

    #[error("invalid card string: {0:?}")]
    InvalidCardString(String),

    #[error("unexpected suit: {0:?}")]
    UnexpectedSuit(String),

    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("hand needs {required} hole cards, found {found}")]
    InsufficientCards { required: usize, found: usize },

    #[error("at most {limit} cards allowed, found {found}")]
    TooManyCards { limit: usize, found: usize },

    #[error("player {0} already holds a hand in this collection")]
    DuplicatePlayer(PlayerId),

    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),
}

pub type Result<T> = std::result::Result<T, PokerError>;
