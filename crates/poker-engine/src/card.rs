//! Playing cards: ranks, parsing and display names.
//!
//! A card token is `<rank><suit>`, e.g. `"Ah"`, `"Td"`, `"10c"` or `"2♠"`.
//!
//! ```
//! use poker_engine::{Card, Rank, Suit};
//!
//! let card: Card = "Ah".parse().unwrap();
//! assert_eq!(card, Card::from_parts(Rank::Ace, Suit::Heart));
//! assert_eq!(card.long_identifier(), "Ace of Hearts");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PokerError, Result};
use crate::suit::Suit;

/// Value an Ace takes when it plays low in a wheel straight.
pub const ACE_LOW: u8 = 1;

/// Represents a card rank (2-14, where 14 = Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

static SHORT_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K", "A",
];

static LONG_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

impl Rank {
    /// All ranks, lowest first
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 through 14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Resolves a numeric value. Both 1 and 14 resolve to the Ace.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            ACE_LOW => Some(Rank::Ace),
            2..=14 => Some(Rank::ALL[usize::from(value - 2)]),
            _ => None,
        }
    }

    fn table_index(self) -> usize {
        usize::from(self.value() - 2)
    }

    /// Returns the rank as a display character
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.table_index()]
    }

    /// Spelled-out name, e.g. "Seven" or "Queen".
    pub fn long_name(self) -> &'static str {
        LONG_NAMES[self.table_index()]
    }

    /// Plural used in hand descriptions ("Pair of Sixes").
    pub fn plural_name(self) -> String {
        match self {
            Rank::Six => "Sixes".to_string(),
            other => format!("{}s", other.long_name()),
        }
    }

    fn from_symbol(symbol: &str) -> Option<Rank> {
        if symbol.bytes().all(|b| b.is_ascii_digit()) {
            if symbol.starts_with('0') {
                return None;
            }
            return match symbol.parse::<u8>().ok()? {
                value @ 2..=10 => Rank::from_value(value),
                _ => None,
            };
        }
        let upper = symbol.to_ascii_uppercase();
        Rank::ALL[8..]
            .iter()
            .copied()
            .find(|rank| rank.short_name() == upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Builds a card from a numeric value (1-14).
    ///
    /// A value of 1 is the low interpretation of the Ace and is stored as 14,
    /// so there is exactly one representation of every card.
    pub fn new(value: u8, suit: Suit) -> Result<Card> {
        let rank = Rank::from_value(value).ok_or(PokerError::InvalidCard(value))?;
        Ok(Card { rank, suit })
    }

    pub const fn from_parts(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Numeric value of the rank, 2 through 14.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn short_name(&self) -> &'static str {
        self.rank.short_name()
    }

    pub fn long_name(&self) -> &'static str {
        self.rank.long_name()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn is_queen(&self) -> bool {
        self.rank == Rank::Queen
    }

    pub fn is_jack(&self) -> bool {
        self.rank == Rank::Jack
    }

    /// Jack, Queen, King or Ace.
    pub fn is_face_card(&self) -> bool {
        self.rank >= Rank::Jack
    }

    /// Two through Ten.
    pub fn is_number_card(&self) -> bool {
        self.rank <= Rank::Ten
    }

    /// Rank and suit glyph, e.g. "T♦".
    pub fn short_identifier(&self) -> String {
        format!("{}{}", self.short_name(), self.suit.symbol())
    }

    /// e.g. "Ten of Diamonds".
    pub fn long_identifier(&self) -> String {
        format!("{} of {}", self.long_name(), self.suit.name())
    }

    /// ASCII token accepted by [`Card::from_str`], e.g. "Td".
    pub fn token(&self) -> String {
        format!("{}{}", self.short_name(), self.suit.letter())
    }

    /// Position in a canonical 52-card ordering.
    pub(crate) fn index(&self) -> usize {
        let suit = match self.suit {
            Suit::Club => 0,
            Suit::Diamond => 1,
            Suit::Heart => 2,
            Suit::Spade => 3,
        };
        suit * 13 + self.rank.table_index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.short_name(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Card> {
        let invalid = || PokerError::InvalidCardString(token.to_string());

        let split = match token.find(|c: char| !c.is_ascii_digit()) {
            Some(0) => token.chars().next().map_or(0, char::len_utf8),
            Some(pos) => pos,
            None => return Err(invalid()),
        };
        let (rank, suit) = token.split_at(split);
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
        Ok(Card { rank, suit })
    }
}

/// Wire shape of a card: `{"suit": <suit id>, "value": <rank>}`.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    suit: u8,
    value: u8,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        CardRepr {
            suit: card.suit.id(),
            value: card.value(),
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = PokerError;

    fn try_from(repr: CardRepr) -> Result<Card> {
        let suit =
            Suit::from_id(repr.suit).ok_or_else(|| PokerError::UnexpectedSuit(repr.suit.to_string()))?;
        Card::new(repr.value, suit)
    }
}

/// Parses a space-separated list of card tokens.
pub fn parse_cards(cards: &str) -> Result<Vec<Card>> {
    cards.split_whitespace().map(str::parse).collect()
}
