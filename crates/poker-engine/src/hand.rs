//! Hands held by players and the set of hands contesting a pot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::write_cards;
use crate::card::{Card, parse_cards};
use crate::error::{PokerError, Result};
use crate::player::{Client, Player, PlayerId};

/// The cards dealt to one player, plus win/tie tallies across evaluations.
///
/// Serializes as `{"cards": [...], "player": ...}`; the tallies are runtime
/// state and are not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand<P = Client> {
    cards: Vec<Card>,
    player: P,
    #[serde(skip)]
    win_count: u32,
    #[serde(skip)]
    tie_count: u32,
}

impl<P: Player> Hand<P> {
    pub fn new(cards: impl IntoIterator<Item = Card>, player: P) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            player,
            win_count: 0,
            tie_count: 0,
        }
    }

    /// An empty hand, waiting to be dealt.
    pub fn empty(player: P) -> Self {
        Self::new([], player)
    }

    /// Builds a hand from space-separated tokens, e.g. `"Ah Kd"`.
    pub fn parse(cards: &str, player: P) -> Result<Self> {
        Ok(Self::new(parse_cards(cards)?, player))
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_id(&self) -> PlayerId {
        self.player.id()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    pub fn increment_win_count(&mut self) {
        self.win_count += 1;
    }

    pub fn tie_count(&self) -> u32 {
        self.tie_count
    }

    pub fn increment_tie_count(&mut self) {
        self.tie_count += 1;
    }
}

impl<P> fmt::Display for Hand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Hands contesting the same board, unique by player and kept in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HandCollection<P = Client> {
    hands: Vec<Hand<P>>,
}

impl<P> Default for HandCollection<P> {
    fn default() -> Self {
        Self { hands: Vec::new() }
    }
}

impl<P: Player> HandCollection<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hands(hands: impl IntoIterator<Item = Hand<P>>) -> Result<Self> {
        let mut collection = Self::new();
        for hand in hands {
            collection.push(hand)?;
        }
        Ok(collection)
    }

    /// Adds a hand; a second hand for the same player is rejected.
    pub fn push(&mut self, hand: Hand<P>) -> Result<()> {
        let id = hand.player_id();
        if self.get(id).is_some() {
            return Err(PokerError::DuplicatePlayer(id));
        }
        self.hands.push(hand);
        Ok(())
    }

    pub fn get(&self, player: PlayerId) -> Option<&Hand<P>> {
        self.hands.iter().find(|h| h.player_id() == player)
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut Hand<P>> {
        self.hands.iter_mut().find(|h| h.player_id() == player)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Hand<P>> {
        self.hands.iter().find(|h| h.player().name() == name)
    }

    /// Records one evaluation outcome: a lone winner gets a win, every
    /// member of a shared top spot gets a tie, everyone else gets nothing.
    pub fn record_outcome(&mut self, winners: &[PlayerId]) {
        let single = winners.len() == 1;
        for hand in self.hands.iter_mut().filter(|h| winners.contains(&h.player_id())) {
            if single {
                hand.increment_win_count();
            } else {
                hand.increment_tie_count();
            }
        }
    }
}

impl<P> HandCollection<P> {
    pub fn iter(&self) -> std::slice::Iter<'_, Hand<P>> {
        self.hands.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Hand<P>> {
        self.hands.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl<'a, P> IntoIterator for &'a HandCollection<P> {
    type Item = &'a Hand<P>;
    type IntoIter = std::slice::Iter<'a, Hand<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hands.iter()
    }
}
