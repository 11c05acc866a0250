//! Hand categories, five-card scoring and best-hand selection.
//!
//! A hand's strength is its [`HandRank`] category followed by a tiebreak key
//! of ranks in order of significance. Strengths compare lexicographically, so
//! the derived ordering on [`HandStrength`] is the showdown ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::card::{Card, Rank};
use crate::combinations::for_each_combination;

/// Cards that make up a complete poker hand.
pub const HAND_SIZE: usize = 5;

/// Represents the ranking of a poker hand, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No made hand, only high card.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, Ace playing high or low.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive cards of the same suit.
    StraightFlush,
}

impl HandRank {
    pub fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus tiebreak key.
///
/// For straights the key is the top card of the run, which is `Five` for the
/// wheel (A-2-3-4-5).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength {
    rank: HandRank,
    kickers: Vec<Rank>,
}

impl HandStrength {
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// Tiebreak key as numeric rank values.
    pub fn key_values(&self) -> Vec<u8> {
        self.kickers.iter().map(|r| r.value()).collect()
    }

    /// Human-readable description, e.g. "Pair of Aces".
    pub fn describe(&self) -> String {
        let name = |i: usize| self.kickers.get(i).map_or("?", |r| r.long_name());
        let plural = |i: usize| {
            self.kickers
                .get(i)
                .map_or_else(|| "?".to_string(), |r| r.plural_name())
        };
        match self.rank {
            HandRank::HighCard => format!("{} High", name(0)),
            HandRank::Pair => format!("Pair of {}", plural(0)),
            HandRank::TwoPair => format!("Two Pair, {} and {}", plural(0), plural(1)),
            HandRank::ThreeOfAKind => format!("Three of a Kind, {}", plural(0)),
            HandRank::Straight => format!("{}-high Straight", name(0)),
            HandRank::Flush => format!("{}-high Flush", name(0)),
            HandRank::FullHouse => format!("Full House, {} over {}", plural(0), plural(1)),
            HandRank::FourOfAKind => format!("Four of a Kind, {}", plural(0)),
            HandRank::StraightFlush if self.kickers.first() == Some(&Rank::Ace) => {
                "Royal Flush".to_string()
            }
            HandRank::StraightFlush => format!("{}-high Straight Flush", name(0)),
        }
    }
}

/// The best combination found among a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    strength: HandStrength,
    cards: Vec<Card>,
}

impl BestHand {
    pub fn strength(&self) -> &HandStrength {
        &self.strength
    }

    pub fn rank(&self) -> HandRank {
        self.strength.rank
    }

    /// The cards of the combination, most significant first. A wheel lists
    /// its Ace last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Compare two hands by strength alone.
    pub fn compare(&self, other: &BestHand) -> Ordering {
        self.strength.cmp(&other.strength)
    }

    pub fn into_parts(self) -> (HandStrength, Vec<Card>) {
        (self.strength, self.cards)
    }
}

/// Scores a set of cards: five or fewer as a single combination, more than
/// five by picking the best five-card subset.
///
/// With fewer than five cards only rank-group categories can be made:
/// straights and flushes need all five.
pub fn score(cards: &[Card]) -> BestHand {
    if cards.len() > HAND_SIZE {
        best_subset(cards)
    } else {
        score_combination(cards)
    }
}

fn score_combination(cards: &[Card]) -> BestHand {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    // (count, rank), count descending then rank descending
    let mut groups: Vec<(usize, Rank)> = Vec::with_capacity(HAND_SIZE);
    for card in &sorted {
        match groups.iter_mut().find(|(_, rank)| *rank == card.rank()) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, card.rank())),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut ordered: Vec<Card> = groups
        .iter()
        .flat_map(|&(_, rank)| sorted.iter().copied().filter(move |c| c.rank() == rank))
        .collect();

    let complete = sorted.len() == HAND_SIZE;
    let is_flush = complete && sorted.iter().all(|c| c.suit() == sorted[0].suit());
    let straight_high = if complete && groups.len() == HAND_SIZE {
        straight_top(&sorted)
    } else {
        None
    };

    if straight_high == Some(Rank::Five) {
        // Ace plays low: move it behind the Two.
        ordered.rotate_left(1);
    }

    let group_ranks = || groups.iter().map(|&(_, rank)| rank).collect::<Vec<_>>();
    let counts: Vec<usize> = groups.iter().map(|&(count, _)| count).collect();

    let (rank, kickers) = match (is_flush, straight_high, counts.as_slice()) {
        (true, Some(high), _) => (HandRank::StraightFlush, vec![high]),
        (_, _, [4, ..]) => (HandRank::FourOfAKind, group_ranks()),
        (_, _, [3, 2]) => (HandRank::FullHouse, group_ranks()),
        (true, None, _) => (HandRank::Flush, group_ranks()),
        (false, Some(high), _) => (HandRank::Straight, vec![high]),
        (_, _, [3, ..]) => (HandRank::ThreeOfAKind, group_ranks()),
        (_, _, [2, 2, ..]) => (HandRank::TwoPair, group_ranks()),
        (_, _, [2, ..]) => (HandRank::Pair, group_ranks()),
        _ => (HandRank::HighCard, group_ranks()),
    };

    BestHand {
        strength: HandStrength { rank, kickers },
        cards: ordered,
    }
}

/// Top rank of a five-card run over distinct ranks sorted high to low.
///
/// An Ace counts as 14 for Broadway and, failing that, as 1 for the wheel.
fn straight_top(sorted: &[Card]) -> Option<Rank> {
    let values: Vec<u8> = sorted.iter().map(|c| c.value()).collect();
    if values[0] - values[HAND_SIZE - 1] == 4 {
        return Some(sorted[0].rank());
    }
    if values == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}

/// Best five-card combination among `cards`, by exhaustive search over every
/// five-card subset. Fewer than five cards are scored as they are.
///
/// Returns `None` for an empty slice.
pub fn best_hand(cards: &[Card]) -> Option<BestHand> {
    if cards.is_empty() {
        None
    } else {
        Some(score(cards))
    }
}

/// Exhaustive search over every five-card subset of more than five cards.
fn best_subset(cards: &[Card]) -> BestHand {
    let mut best = score_combination(&cards[..HAND_SIZE]);
    let mut subset = [cards[0]; HAND_SIZE];
    for_each_combination(cards.len(), HAND_SIZE, |indices| {
        for (slot, &i) in subset.iter_mut().zip(indices) {
            *slot = cards[i];
        }
        let candidate = score_combination(&subset);
        if candidate.strength > best.strength {
            best = candidate;
        }
    });
    best
}
