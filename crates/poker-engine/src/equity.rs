//! Win/tie probabilities over the cards nobody has seen yet.
//!
//! When few enough board completions remain, every completion is enumerated
//! and the figures are exact. Otherwise completions are sampled: trials run in
//! fixed-size batches, each with its own seeded RNG and its own copy of the
//! unseen cards, so a fixed seed reproduces the same report on any machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::card::Card;
use crate::combinations::{binomial, for_each_combination};
use crate::deck::{full_deck, mark_dealt};
use crate::error::{PokerError, Result};
use crate::player::PlayerId;
use crate::ranking::HandStrength;

/// Tuning for equity estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Monte Carlo trials when enumeration is too large.
    pub trials: usize,
    /// Largest number of board completions still enumerated exactly.
    pub exhaustive_limit: u64,
    /// Seed for sampled runs; `None` picks a fresh one per call.
    pub seed: Option<u64>,
    /// Trials handled by one independent worker batch.
    pub batch_size: usize,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            exhaustive_limit: 50_000,
            seed: None,
            batch_size: 512,
        }
    }
}

impl EquityConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_exhaustive_limit(mut self, limit: u64) -> Self {
        self.exhaustive_limit = limit;
        self
    }
}

/// How the figures in an [`EquityReport`] were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Every remaining board was dealt out.
    Exact { completions: u64 },
    /// A random sample of boards; figures vary between seeds.
    Sampled { trials: u64, seed: u64 },
}

/// Outcome tallies for one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandEquity {
    player: PlayerId,
    wins: u64,
    ties: u64,
    tie_share: f64,
    outcomes: u64,
}

impl HandEquity {
    pub fn player_id(&self) -> PlayerId {
        self.player
    }

    /// Boards on which this hand won outright.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Boards on which this hand shared the best spot.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    pub fn win(&self) -> f64 {
        ratio(self.wins as f64, self.outcomes)
    }

    pub fn tie(&self) -> f64 {
        ratio(self.ties as f64, self.outcomes)
    }

    /// Expected share of the pot: outright wins plus split fractions.
    pub fn equity(&self) -> f64 {
        ratio(self.wins as f64 + self.tie_share, self.outcomes)
    }
}

fn ratio(numerator: f64, outcomes: u64) -> f64 {
    if outcomes == 0 {
        0.0
    } else {
        numerator / outcomes as f64
    }
}

/// Per-hand equity, in the order the hands were given.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityReport {
    precision: Precision,
    outcomes: u64,
    tied_outcomes: u64,
    hands: Vec<HandEquity>,
}

impl EquityReport {
    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.precision, Precision::Exact { .. })
    }

    /// Boards evaluated, enumerated or sampled.
    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    /// Fraction of boards on which two or more hands split.
    pub fn tie_rate(&self) -> f64 {
        ratio(self.tied_outcomes as f64, self.outcomes)
    }

    pub fn get(&self, player: PlayerId) -> Option<&HandEquity> {
        self.hands.iter().find(|h| h.player == player)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HandEquity> {
        self.hands.iter()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// Running counts for a batch of boards.
#[derive(Debug, Clone)]
struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    tie_share: Vec<f64>,
    tied_outcomes: u64,
    outcomes: u64,
}

impl Tally {
    fn new(hands: usize) -> Self {
        Self {
            wins: vec![0; hands],
            ties: vec![0; hands],
            tie_share: vec![0.0; hands],
            tied_outcomes: 0,
            outcomes: 0,
        }
    }

    /// Credits one board. Positions line up with the holdings; a hand the
    /// evaluator could not score (`None`) never wins.
    fn record(&mut self, strengths: &[Option<HandStrength>]) {
        self.outcomes += 1;
        let Some(top) = strengths.iter().max().filter(|top| top.is_some()) else {
            return;
        };
        let winners: Vec<usize> = (0..strengths.len())
            .filter(|&i| strengths[i] == *top)
            .collect();
        if let [only] = winners.as_slice() {
            self.wins[*only] += 1;
            return;
        }
        self.tied_outcomes += 1;
        let share = 1.0 / winners.len() as f64;
        for i in winners {
            self.ties[i] += 1;
            self.tie_share[i] += share;
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for i in 0..self.wins.len() {
            self.wins[i] += other.wins[i];
            self.ties[i] += other.ties[i];
            self.tie_share[i] += other.tie_share[i];
        }
        self.tied_outcomes += other.tied_outcomes;
        self.outcomes += other.outcomes;
        self
    }

    fn into_report(self, precision: Precision, players: &[PlayerId]) -> EquityReport {
        let hands = players
            .iter()
            .enumerate()
            .map(|(i, &player)| HandEquity {
                player,
                wins: self.wins[i],
                ties: self.ties[i],
                tie_share: self.tie_share[i],
                outcomes: self.outcomes,
            })
            .collect();
        EquityReport {
            precision,
            outcomes: self.outcomes,
            tied_outcomes: self.tied_outcomes,
            hands,
        }
    }
}

/// SplitMix64 finalizer, used to spread consecutive batch seeds apart.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Cards not held by anyone and not on the board, failing on any card seen
/// twice.
fn unseen_cards(board: &Board, holdings: &[(PlayerId, &[Card])]) -> Result<Vec<Card>> {
    let known = holdings
        .iter()
        .flat_map(|(_, hole)| hole.iter())
        .chain(board.iter());
    let dealt = mark_dealt(known)?;
    Ok(full_deck()
        .into_iter()
        .filter(|card| !dealt[card.index()])
        .collect())
}

/// Strength of every holding on one completed board, in holding order.
fn strengths<F>(
    holdings: &[(PlayerId, &[Card])],
    full_board: &[Card],
    strength: &F,
) -> Vec<Option<HandStrength>>
where
    F: Fn(&[Card], &[Card]) -> Option<HandStrength>,
{
    holdings
        .iter()
        .map(|(_, hole)| strength(hole, full_board))
        .collect()
}

/// Estimates equity for `holdings` on `board`, completing the board up to
/// `board_size` cards.
///
/// `strength` scores one hole-card set against a complete board.
pub(crate) fn estimate<F>(
    board: &Board,
    holdings: &[(PlayerId, &[Card])],
    board_size: usize,
    config: &EquityConfig,
    strength: F,
) -> Result<EquityReport>
where
    F: Fn(&[Card], &[Card]) -> Option<HandStrength> + Sync,
{
    let players: Vec<PlayerId> = holdings.iter().map(|(id, _)| *id).collect();
    let unseen = unseen_cards(board, holdings)?;
    let slots = board_size.saturating_sub(board.len());
    if unseen.len() < slots {
        return Err(PokerError::TooManyCards {
            limit: 52 - slots,
            found: 52 - unseen.len(),
        });
    }

    if holdings.len() < 2 {
        // nothing to race against
        let mut tally = Tally::new(holdings.len());
        tally.outcomes = 1;
        tally.wins.iter_mut().for_each(|w| *w = 1);
        return Ok(tally.into_report(Precision::Exact { completions: 1 }, &players));
    }

    let completions = binomial(unseen.len(), slots);
    debug!(
        unseen = unseen.len(),
        slots,
        completions,
        limit = config.exhaustive_limit,
        "Choosing equity mode"
    );

    if completions <= config.exhaustive_limit {
        let tally = enumerate(board, holdings, &unseen, slots, &strength);
        return Ok(tally.into_report(Precision::Exact { completions }, &players));
    }

    let trials = config.trials.max(1);
    let seed = config.seed.unwrap_or_else(rand::random);
    let tally = sample(board, holdings, &unseen, slots, trials, seed, config.batch_size, &strength);
    Ok(tally.into_report(
        Precision::Sampled {
            trials: trials as u64,
            seed,
        },
        &players,
    ))
}

fn enumerate<F>(
    board: &Board,
    holdings: &[(PlayerId, &[Card])],
    unseen: &[Card],
    slots: usize,
    strength: &F,
) -> Tally
where
    F: Fn(&[Card], &[Card]) -> Option<HandStrength>,
{
    let mut tally = Tally::new(holdings.len());
    let mut full_board = board.cards().to_vec();
    for_each_combination(unseen.len(), slots, |indices| {
        full_board.truncate(board.len());
        full_board.extend(indices.iter().map(|&i| unseen[i]));
        tally.record(&strengths(holdings, &full_board, strength));
    });
    tally
}

#[allow(clippy::too_many_arguments)]
fn sample<F>(
    board: &Board,
    holdings: &[(PlayerId, &[Card])],
    unseen: &[Card],
    slots: usize,
    trials: usize,
    seed: u64,
    batch_size: usize,
    strength: &F,
) -> Tally
where
    F: Fn(&[Card], &[Card]) -> Option<HandStrength> + Sync,
{
    let batch_size = batch_size.max(1);
    let batches = trials.div_ceil(batch_size);

    // Collected in batch order, then summed sequentially, so the floating
    // point tie shares add up identically on every run.
    let tallies: Vec<Tally> = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let count = batch_size.min(trials - batch * batch_size);
            let mut rng = StdRng::seed_from_u64(splitmix64(seed.wrapping_add(batch as u64)));
            let mut pool = unseen.to_vec();
            let mut full_board = board.cards().to_vec();
            let mut tally = Tally::new(holdings.len());
            for _ in 0..count {
                let (drawn, _) = pool.partial_shuffle(&mut rng, slots);
                full_board.truncate(board.len());
                full_board.extend_from_slice(drawn);
                tally.record(&strengths(holdings, &full_board, strength));
            }
            tally
        })
        .collect();

    tallies
        .into_iter()
        .fold(Tally::new(holdings.len()), Tally::merge)
}
