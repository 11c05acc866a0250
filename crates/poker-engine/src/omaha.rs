use crate::card::Card;
use crate::combinations::for_each_combination;
use crate::equity::EquityConfig;
use crate::evaluator::CardEvaluator;
use crate::ranking::{BestHand, score};

/// Hole cards an Omaha hand must play.
const HOLE_USED: usize = 2;
/// Board cards an Omaha hand must play once the flop is out.
const BOARD_USED: usize = 3;

/// Omaha: four hole cards, five on the board, and every hand is made of
/// exactly two hole cards plus three board cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Omaha {
    config: EquityConfig,
}

impl Omaha {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EquityConfig) -> Self {
        Self { config }
    }
}

impl CardEvaluator for Omaha {
    fn name(&self) -> &'static str {
        "Omaha"
    }

    fn hole_cards(&self) -> usize {
        4
    }

    fn board_cards(&self) -> usize {
        5
    }

    fn equity_config(&self) -> &EquityConfig {
        &self.config
    }

    /// Before the flop the board plays in full alongside two hole cards.
    fn best(&self, hole: &[Card], board: &[Card]) -> Option<BestHand> {
        let hole_used = HOLE_USED.min(hole.len());
        let board_used = BOARD_USED.min(board.len());

        let mut best: Option<BestHand> = None;
        let mut cards = Vec::with_capacity(hole_used + board_used);
        for_each_combination(hole.len(), hole_used, |hole_idx| {
            for_each_combination(board.len(), board_used, |board_idx| {
                cards.clear();
                cards.extend(hole_idx.iter().map(|&i| hole[i]));
                cards.extend(board_idx.iter().map(|&i| board[i]));
                if cards.is_empty() {
                    return;
                }
                let candidate = score(&cards);
                if best
                    .as_ref()
                    .is_none_or(|b| candidate.strength() > b.strength())
                {
                    best = Some(candidate);
                }
            });
        });
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::card::parse_cards;
    use crate::error::PokerError;
    use crate::hand::{Hand, HandCollection};
    use crate::player::Client;
    use crate::ranking::HandRank;

    fn best(hole: &str, board: &str) -> BestHand {
        Omaha::new()
            .best(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap())
            .unwrap()
    }

    #[test]
    fn four_suited_on_the_board_is_not_a_flush() {
        // One heart in hand is not enough; two are required.
        let hand = best("Ah Kc Qd 2s", "3h 7h 9h Jh 4c");
        assert_ne!(hand.rank(), HandRank::Flush);

        let hand = best("Ah 2h Qd 2s", "3h 7h 9h Jc 4c");
        assert_eq!(hand.rank(), HandRank::Flush);
    }

    #[test]
    fn board_quads_do_not_play() {
        // Quads on board: only three of them can be used.
        let hand = best("Ac Kd 2h 3h", "9s 9h 9d 9c Qs");
        assert_eq!(hand.rank(), HandRank::ThreeOfAKind);

        let hand = best("Qc Qd 2h 3h", "9s 9h 9d 9c Ks");
        assert_eq!(hand.rank(), HandRank::FullHouse);
    }

    #[test]
    fn uses_exactly_two_hole_cards() {
        let hand = best("Ah Ad Ac 2s", "Kh Qd 7c 5s 3h");
        assert_eq!(hand.rank(), HandRank::Pair);
        assert_eq!(hand.cards().len(), 5);
    }

    #[test]
    fn partial_board_plays_in_full() {
        let hand = best("Ah Ad Kc 2s", "As");
        assert_eq!(hand.rank(), HandRank::ThreeOfAKind);
        assert_eq!(hand.cards().len(), 3);
    }

    #[test]
    fn showdown_needs_four_hole_cards() {
        let board: Board = "Kh Qd 7c 5s 3h".parse().unwrap();
        let mut hands =
            HandCollection::from_hands([Hand::parse("Ah Ad", Client::register(1, "alice")).unwrap()])
                .unwrap();
        assert_eq!(
            Omaha::new().evaluate_hands(&board, &mut hands),
            Err(PokerError::InsufficientCards {
                required: 4,
                found: 2
            })
        );
    }

    #[test]
    fn equity_is_exact_on_the_turn() {
        let board: Board = "Kh Qd 7c 5s".parse().unwrap();
        let hands = HandCollection::from_hands([
            Hand::parse("Ah Ad Jc Tc", Client::register(1, "alice")).unwrap(),
            Hand::parse("Ks Kc 2d 3d", Client::register(2, "bob")).unwrap(),
        ])
        .unwrap();
        let report = Omaha::new().evaluate_hands_equity(&board, &hands).unwrap();
        assert!(report.is_exact());
        assert_eq!(report.outcomes(), 40);
        assert!(report.get(2).unwrap().equity() > 0.5);
    }
}
