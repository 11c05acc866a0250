use std::collections::VecDeque;

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank};
use crate::error::{PokerError, Result};
use crate::suit::Suit;

/// All 52 cards, grouped by suit and ordered by rank within each suit.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::from_parts(rank, suit)))
        .collect()
}

/// Marks each card as dealt, failing on the first card that shows up twice.
///
/// The returned table is indexed by the card's position in the 52-card order.
pub(crate) fn mark_dealt<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<[bool; 52]> {
    let mut dealt = [false; 52];
    for card in cards {
        let slot = &mut dealt[card.index()];
        if *slot {
            return Err(PokerError::DuplicateCard(*card));
        }
        *slot = true;
    }
    Ok(dealt)
}

/// An ordered, duplicate-free stack of cards dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh, unshuffled 52-card deck.
    pub fn new() -> Self {
        Self {
            cards: full_deck().into(),
        }
    }

    /// Shuffle the remaining cards with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rng());
    }

    /// Shuffle the remaining cards with a caller-supplied RNG.
    ///
    /// Uses the Fisher-Yates shuffle, so every ordering of the remaining
    /// cards is equally likely. Cards already drawn stay out of the deck.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(PokerError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn chi_square(counts: impl Iterator<Item = usize>, expected: f64) -> f64 {
        counts
            .map(|observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    #[test]
    fn test_full_deck() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.cards().copied().collect();
        assert_eq!(unique.len(), 52);

        for rank in Rank::ALL {
            let count = deck.cards().filter(|c| c.rank() == rank).count();
            assert_eq!(count, 4, "Should have 4 cards of {:?}", rank);
        }
        for suit in Suit::ALL {
            let count = deck.cards().filter(|c| c.suit() == suit).count();
            assert_eq!(count, 13, "Should have 13 cards of {:?}", suit);
        }
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::new();
        let before: HashSet<Card> = deck.cards().copied().collect();
        deck.shuffle_with(&mut StdRng::seed_from_u64(7));
        let after: HashSet<Card> = deck.cards().copied().collect();
        assert_eq!(deck.len(), 52);
        assert_eq!(before, after);
        assert_ne!(deck, Deck::new());
    }

    #[test]
    fn draw_until_empty() {
        let mut deck = Deck::new();
        let mut seen = HashSet::new();
        for _ in 0..52 {
            let card = deck.draw().unwrap();
            assert!(seen.insert(card), "drew {card} twice");
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(PokerError::EmptyDeck));
        assert_eq!(deck.draw(), Err(PokerError::EmptyDeck));
    }

    #[test]
    fn mark_dealt_flags_repeats() {
        let cards = crate::card::parse_cards("Ah Kd Ah").unwrap();
        assert_eq!(
            mark_dealt(&cards),
            Err(PokerError::DuplicateCard(cards[0]))
        );

        let dealt = mark_dealt(&cards[..2]).unwrap();
        assert_eq!(dealt.iter().filter(|d| **d).count(), 2);
        assert!(dealt[cards[1].index()]);
    }

    #[test]
    fn draw_takes_from_the_front() {
        let mut deck = Deck::new();
        let top = *deck.cards().next().unwrap();
        assert_eq!(deck.draw(), Ok(top));
        assert_eq!(deck.len(), 51);
        assert!(deck.cards().all(|c| *c != top));
    }

    #[test]
    fn shuffle_after_draws_only_permutes_the_rest() {
        let mut deck = Deck::new();
        let drawn: Vec<Card> = (0..10).map(|_| deck.draw().unwrap()).collect();
        deck.shuffle_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(deck.len(), 42);
        assert!(deck.cards().all(|c| !drawn.contains(c)));
    }

    #[test]
    fn top_card_position_is_uniform() {
        const ROUNDS: usize = 52_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for _ in 0..ROUNDS {
            let mut deck = Deck::new();
            deck.shuffle_with(&mut rng);
            *counts.entry(deck.draw().unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 52);
        // 51 degrees of freedom; 100 is far beyond the 0.1% critical value.
        let stat = chi_square(counts.into_values(), ROUNDS as f64 / 52.0);
        assert!(stat < 100.0, "chi-square {stat}");
    }

    #[test]
    fn every_ordering_of_a_short_deck_is_equally_likely() {
        const ROUNDS: usize = 60_000;
        let mut deck = Deck::new();
        while deck.len() > 3 {
            deck.draw().unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<Card>, usize> = HashMap::new();
        for _ in 0..ROUNDS {
            deck.shuffle_with(&mut rng);
            *counts.entry(deck.cards().copied().collect()).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        // 5 degrees of freedom.
        let stat = chi_square(counts.into_values(), ROUNDS as f64 / 6.0);
        assert!(stat < 30.0, "chi-square {stat}");
    }
}
