use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{Card, parse_cards};
use crate::error::PokerError;

/// Represents the community cards on the board, or any other ordered run of
/// cards.
///
/// For Hold'em the board fills up in three steps:
/// - Flop: 3 cards
/// - Turn: 1 additional card
/// - River: 1 final card
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// Applies `f` to every card, keeping the order.
    pub fn map(&self, f: impl FnMut(&Card) -> Card) -> Board {
        Board(self.0.iter().map(f).collect())
    }

    /// A copy of this board followed by `extra`.
    pub fn extended(&self, extra: impl IntoIterator<Item = Card>) -> Board {
        let mut cards = self.0.clone();
        cards.extend(extra);
        Board(cards)
    }

    pub fn flop(&self) -> Option<[Card; 3]> {
        match self.0.as_slice() {
            [a, b, c, ..] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    pub fn turn(&self) -> Option<Card> {
        self.0.get(3).copied()
    }

    pub fn river(&self) -> Option<Card> {
        self.0.get(4).copied()
    }
}

impl FromStr for Board {
    type Err = PokerError;

    /// Space-separated card tokens, e.g. `"2h 7d 9s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Board(cards)
    }
}

pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;
    use crate::suit::Suit;

    #[test]
    fn streets() {
        let board: Board = "2h 7d 9s Jc Ah".parse().unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(board.flop().map(|f| f[1].rank()), Some(Rank::Seven));
        assert_eq!(board.turn().map(|c| c.rank()), Some(Rank::Jack));
        assert_eq!(board.river().map(|c| c.rank()), Some(Rank::Ace));

        let flop_only: Board = "2h 7d 9s".parse().unwrap();
        assert!(flop_only.flop().is_some());
        assert_eq!(flop_only.turn(), None);
        assert_eq!(Board::new().flop(), None);
    }

    #[test]
    fn map_preserves_order() {
        let board: Board = "2h 7d 9s".parse().unwrap();
        let spades = board.map(|c| Card::from_parts(c.rank(), Suit::Spade));
        assert_eq!(spades.to_string(), "2♠ 7♠ 9♠");
        assert_eq!(board.to_string(), "2♥ 7♦ 9♠");
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let board: Board = "2h 7d 9s".parse().unwrap();
        let river: Board = "Jc Ah".parse().unwrap();
        let full = board.extended(river.iter().copied());
        assert_eq!(board.len(), 3);
        assert_eq!(full.len(), 5);
        assert!(full.contains(&"Ah".parse().unwrap()));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            "2h 7x".parse::<Board>(),
            Err(PokerError::InvalidCardString("7x".to_string()))
        );
    }

    #[test]
    fn serializes_as_card_list() {
        let board: Board = "Ah 2c".parse().unwrap();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "suit": 102, "value": 14 }, { "suit": 100, "value": 2 }])
        );
    }
}
