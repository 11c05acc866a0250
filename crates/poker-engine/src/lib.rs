pub mod board;
pub mod card;
mod combinations;
pub mod dealer;
pub mod deck;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod holdem;
pub mod omaha;
pub mod player;
pub mod ranking;
pub mod suit;

pub use board::Board;
pub use card::{Card, Rank, parse_cards};
pub use dealer::Dealer;
pub use deck::Deck;
pub use equity::{EquityConfig, EquityReport, HandEquity, Precision};
pub use error::{PokerError, Result};
pub use evaluator::{CardEvaluator, HandResult, ResultCollection};
pub use hand::{Hand, HandCollection};
pub use holdem::TexasHoldem;
pub use omaha::Omaha;
pub use player::{Client, Player, PlayerId};
pub use ranking::{BestHand, HandRank, HandStrength, best_hand};
pub use suit::Suit;
