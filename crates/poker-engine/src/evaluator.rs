//! The pluggable evaluation capability and the results it produces.
//!
//! A poker variant implements [`CardEvaluator`] by saying how many hole and
//! board cards it deals and how to pick the best combination from them. The
//! showdown and equity flows are shared by every variant.

use tracing::debug;

use crate::board::Board;
use crate::card::Card;
use crate::deck::mark_dealt;
use crate::equity::{self, EquityConfig, EquityReport};
use crate::error::{PokerError, Result};
use crate::hand::{Hand, HandCollection};
use crate::player::{Player, PlayerId};
use crate::ranking::{BestHand, HandRank, HandStrength};

/// Evaluation of one hand against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    player: PlayerId,
    strength: HandStrength,
    best_cards: Vec<Card>,
}

impl HandResult {
    pub fn new(player: PlayerId, best: BestHand) -> Self {
        let (strength, best_cards) = best.into_parts();
        Self {
            player,
            strength,
            best_cards,
        }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player
    }

    pub fn rank(&self) -> HandRank {
        self.strength.rank()
    }

    pub fn strength(&self) -> &HandStrength {
        &self.strength
    }

    /// The (up to) five cards making the hand.
    pub fn best_cards(&self) -> &[Card] {
        &self.best_cards
    }

    pub fn describe(&self) -> String {
        self.strength.describe()
    }
}

/// Showdown results ordered best to worst, with equal hands grouped.
///
/// Within a group, results keep the order the hands were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultCollection {
    groups: Vec<Vec<HandResult>>,
}

impl ResultCollection {
    pub fn new(mut results: Vec<HandResult>) -> Self {
        // stable: ties keep insertion order
        results.sort_by(|a, b| b.strength.cmp(&a.strength));

        let mut groups: Vec<Vec<HandResult>> = Vec::new();
        for result in results {
            match groups.last_mut() {
                Some(group) if group[0].strength == result.strength => group.push(result),
                _ => groups.push(vec![result]),
            }
        }
        Self { groups }
    }

    /// Tie groups, best first.
    pub fn groups(&self) -> impl Iterator<Item = &[HandResult]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// All results, best first.
    pub fn iter(&self) -> impl Iterator<Item = &HandResult> {
        self.groups.iter().flatten()
    }

    /// The best hand, or every hand sharing the best spot.
    pub fn winners(&self) -> &[HandResult] {
        self.groups.first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn winner_ids(&self) -> Vec<PlayerId> {
        self.winners().iter().map(HandResult::player_id).collect()
    }

    pub fn is_tie(&self) -> bool {
        self.winners().len() > 1
    }

    /// Finishing place of a player, 0 for the winning group.
    pub fn place_of(&self, player: PlayerId) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|r| r.player == player))
    }

    pub fn get(&self, player: PlayerId) -> Option<&HandResult> {
        self.iter().find(|r| r.player == player)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A poker variant's hand-evaluation rules.
///
/// Implementors supply the deal shape and [`best`](CardEvaluator::best);
/// everything else has a shared default.
pub trait CardEvaluator: Sync {
    fn name(&self) -> &'static str;

    /// Private cards each player must hold.
    fn hole_cards(&self) -> usize;

    /// Community cards on a complete board.
    fn board_cards(&self) -> usize;

    /// Settings for [`evaluate_hands_equity`](CardEvaluator::evaluate_hands_equity).
    fn equity_config(&self) -> &EquityConfig;

    /// Best combination from already validated hole and board cards.
    fn best(&self, hole: &[Card], board: &[Card]) -> Option<BestHand>;

    /// Checks a hand and board against the variant's deal shape.
    fn check_deal(&self, hole: &[Card], board: &Board) -> Result<()> {
        if hole.len() < self.hole_cards() {
            return Err(PokerError::InsufficientCards {
                required: self.hole_cards(),
                found: hole.len(),
            });
        }
        if hole.len() > self.hole_cards() {
            return Err(PokerError::TooManyCards {
                limit: self.hole_cards(),
                found: hole.len(),
            });
        }
        if board.len() > self.board_cards() {
            return Err(PokerError::TooManyCards {
                limit: self.board_cards(),
                found: board.len(),
            });
        }
        Ok(())
    }

    /// Best hand a player can make from the cards revealed so far.
    fn evaluate<P: Player>(&self, board: &Board, hand: &Hand<P>) -> Result<HandResult> {
        self.check_deal(hand.cards(), board)?;
        mark_dealt(hand.cards().iter().chain(board.iter()))?;
        let best = self
            .best(hand.cards(), board.cards())
            .ok_or(PokerError::InsufficientCards {
                required: self.hole_cards(),
                found: hand.count(),
            })?;
        Ok(HandResult::new(hand.player_id(), best))
    }

    /// Ranks every hand and records the outcome on the hands' counters.
    ///
    /// All hands are evaluated before any counter moves, so a failing hand
    /// leaves every counter untouched. A card dealt twice anywhere in the
    /// round fails with [`PokerError::DuplicateCard`].
    fn evaluate_hands<P: Player>(
        &self,
        board: &Board,
        hands: &mut HandCollection<P>,
    ) -> Result<ResultCollection> {
        mark_dealt(
            hands
                .iter()
                .flat_map(|hand| hand.cards())
                .chain(board.iter()),
        )?;
        let results = hands
            .iter()
            .map(|hand| self.evaluate(board, hand))
            .collect::<Result<Vec<_>>>()?;
        let ranked = ResultCollection::new(results);

        hands.record_outcome(&ranked.winner_ids());
        debug!(
            variant = self.name(),
            hands = hands.len(),
            winners = ranked.winners().len(),
            "Evaluated showdown"
        );
        Ok(ranked)
    }

    /// Win and tie probabilities for every hand over the unseen cards.
    ///
    /// See [`EquityReport::precision`] for whether the figures are exact.
    fn evaluate_hands_equity<P: Player>(
        &self,
        board: &Board,
        hands: &HandCollection<P>,
    ) -> Result<EquityReport> {
        for hand in hands {
            self.check_deal(hand.cards(), board)?;
        }
        let holdings: Vec<(PlayerId, &[Card])> =
            hands.iter().map(|h| (h.player_id(), h.cards())).collect();

        equity::estimate(
            board,
            &holdings,
            self.board_cards(),
            self.equity_config(),
            |hole, full_board| self.best(hole, full_board).map(|b| b.into_parts().0),
        )
    }
}
