use crate::card::Card;
use crate::equity::EquityConfig;
use crate::evaluator::CardEvaluator;
use crate::ranking::{BestHand, best_hand};

/// Texas Hold'em: two hole cards, five on the board, best five of the seven.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TexasHoldem {
    config: EquityConfig,
}

impl TexasHoldem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EquityConfig) -> Self {
        Self { config }
    }
}

impl CardEvaluator for TexasHoldem {
    fn name(&self) -> &'static str {
        "Texas Hold'em"
    }

    fn hole_cards(&self) -> usize {
        2
    }

    fn board_cards(&self) -> usize {
        5
    }

    fn equity_config(&self) -> &EquityConfig {
        &self.config
    }

    fn best(&self, hole: &[Card], board: &[Card]) -> Option<BestHand> {
        let mut cards = Vec::with_capacity(hole.len() + board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        best_hand(&cards)
    }
}
