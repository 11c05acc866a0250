use std::fmt;
use std::str::FromStr;

use crate::error::PokerError;

/// Represents a card suit (Clubs, Diamonds, Hearts, Spades).
///
/// The four variants are the only suits that exist; every projection below is
/// an exhaustive match, so adding a variant without mapping it fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in deck order
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Stable numeric id used on the wire.
    pub const fn id(self) -> u8 {
        match self {
            Suit::Club => 100,
            Suit::Diamond => 101,
            Suit::Heart => 102,
            Suit::Spade => 103,
        }
    }

    pub(crate) fn from_id(id: u8) -> Option<Suit> {
        Suit::ALL.into_iter().find(|suit| suit.id() == id)
    }

    /// Returns the suit as a display symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Club => "\u{2663}",
            Suit::Diamond => "\u{2666}",
            Suit::Heart => "\u{2665}",
            Suit::Spade => "\u{2660}",
        }
    }

    /// Lowercase single-letter code used in card tokens.
    pub const fn letter(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }

    /// Plural long name, as in "Ace of Spades".
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = PokerError;

    /// Accepts a letter code (any case) or a unicode glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let mut chars = lowered.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        Suit::ALL
            .into_iter()
            .find(|suit| letter == Some(suit.letter()) || s == suit.symbol())
            .ok_or_else(|| PokerError::UnexpectedSuit(s.to_string()))
    }
}
