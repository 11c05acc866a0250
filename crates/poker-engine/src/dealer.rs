//! The dealer: owns the deck for a round and hands evaluation off to
//! whichever variant it was started with.

use rand::Rng;
use tracing::trace;

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::equity::EquityReport;
use crate::error::Result;
use crate::evaluator::{CardEvaluator, ResultCollection};
use crate::hand::HandCollection;
use crate::player::Player;

#[derive(Debug, Clone)]
pub struct Dealer<E> {
    deck: Deck,
    evaluator: E,
}

impl<E: CardEvaluator> Dealer<E> {
    pub fn start_work(deck: Deck, evaluator: E) -> Self {
        Self { deck, evaluator }
    }

    pub fn name(&self) -> &'static str {
        "Dealer"
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Replaces the deck with a fresh, unshuffled one for the next round.
    pub fn new_deck(&mut self) {
        self.deck = Deck::new();
    }

    pub fn deal_card(&mut self) -> Result<Card> {
        let card = self.deck.draw()?;
        trace!(%card, remaining = self.deck.len(), "Dealt card");
        Ok(card)
    }

    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle();
        trace!(cards = self.deck.len(), "Shuffled deck");
    }

    pub fn shuffle_deck_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle_with(rng);
        trace!(cards = self.deck.len(), "Shuffled deck");
    }

    /// Deals one card to each hand per pass until every hand holds the
    /// variant's hole count. Hands already full are skipped.
    pub fn deal_hole_cards<P: Player>(&mut self, hands: &mut HandCollection<P>) -> Result<()> {
        let target = self.evaluator.hole_cards();
        for _ in 0..target {
            for hand in hands.iter_mut().filter(|h| h.count() < target) {
                let card = self.deal_card()?;
                hand.add_card(card);
            }
        }
        Ok(())
    }

    /// Turns `count` cards onto the board.
    pub fn deal_board(&mut self, board: &mut Board, count: usize) -> Result<()> {
        for _ in 0..count {
            board.push(self.deal_card()?);
        }
        Ok(())
    }

    pub fn evaluate_hands<P: Player>(
        &self,
        board: &Board,
        hands: &mut HandCollection<P>,
    ) -> Result<ResultCollection> {
        self.evaluator.evaluate_hands(board, hands)
    }

    pub fn evaluate_hands_equity<P: Player>(
        &self,
        board: &Board,
        hands: &HandCollection<P>,
    ) -> Result<EquityReport> {
        self.evaluator.evaluate_hands_equity(board, hands)
    }
}
