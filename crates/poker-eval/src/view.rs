//! Printable and serializable summaries of engine results.

use std::fmt;

use poker_engine::{Board, Card, EquityReport, HandCollection, Player, Precision, ResultCollection};
use serde::Serialize;

fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::token).collect()
}

fn player_name(hands: &HandCollection, id: u32) -> String {
    hands
        .get(id)
        .map(|h| h.player().name().to_string())
        .unwrap_or_else(|| format!("#{id}"))
}

#[derive(Debug, Serialize)]
pub struct ShowdownView {
    variant: &'static str,
    board: Vec<String>,
    results: Vec<ResultView>,
}

#[derive(Debug, Serialize)]
struct ResultView {
    place: usize,
    player: u32,
    name: String,
    hole: Vec<String>,
    rank: String,
    description: String,
    best_cards: Vec<String>,
    tie: bool,
}

impl ShowdownView {
    pub fn new(
        variant: &'static str,
        board: &Board,
        hands: &HandCollection,
        ranked: &ResultCollection,
    ) -> Self {
        let results = ranked
            .groups()
            .enumerate()
            .flat_map(|(place, group)| {
                let tie = group.len() > 1;
                group.iter().map(move |result| (place + 1, tie, result))
            })
            .map(|(place, tie, result)| ResultView {
                place,
                player: result.player_id(),
                name: player_name(hands, result.player_id()),
                hole: hands
                    .get(result.player_id())
                    .map(|h| tokens(h.cards()))
                    .unwrap_or_default(),
                rank: result.rank().to_string(),
                description: result.describe(),
                best_cards: tokens(result.best_cards()),
                tie,
            })
            .collect();
        Self {
            variant,
            board: tokens(board.cards()),
            results,
        }
    }
}

impl fmt::Display for ShowdownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | board: {}", self.variant, self.board.join(" "))?;
        for r in &self.results {
            let tie = if r.tie { " (tie)" } else { "" };
            writeln!(
                f,
                "{}. {:<10} {:<12} {} [{}]{}",
                r.place,
                r.name,
                r.hole.join(" "),
                r.description,
                r.best_cards.join(" "),
                tie
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct EquityView {
    variant: &'static str,
    board: Vec<String>,
    exact: bool,
    outcomes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    tie_rate: f64,
    hands: Vec<HandEquityView>,
}

#[derive(Debug, Serialize)]
struct HandEquityView {
    player: u32,
    name: String,
    hole: Vec<String>,
    win: f64,
    tie: f64,
    equity: f64,
}

impl EquityView {
    pub fn new(
        variant: &'static str,
        board: &Board,
        hands: &HandCollection,
        report: &EquityReport,
    ) -> Self {
        let seed = match report.precision() {
            Precision::Sampled { seed, .. } => Some(seed),
            Precision::Exact { .. } => None,
        };
        let rows = report
            .iter()
            .map(|equity| HandEquityView {
                player: equity.player_id(),
                name: player_name(hands, equity.player_id()),
                hole: hands
                    .get(equity.player_id())
                    .map(|h| tokens(h.cards()))
                    .unwrap_or_default(),
                win: equity.win(),
                tie: equity.tie(),
                equity: equity.equity(),
            })
            .collect();
        Self {
            variant,
            board: tokens(board.cards()),
            exact: report.is_exact(),
            outcomes: report.outcomes(),
            seed,
            tie_rate: report.tie_rate(),
            hands: rows,
        }
    }
}

impl fmt::Display for EquityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | board: {}", self.variant, self.board.join(" "))?;
        match self.seed {
            Some(seed) => writeln!(
                f,
                "sampled over {} boards (seed {seed}); figures are estimates",
                self.outcomes
            )?,
            None => writeln!(f, "exact over {} boards", self.outcomes)?,
        }
        for h in &self.hands {
            writeln!(
                f,
                "{:<10} {:<12} win {:>6.2}%  tie {:>6.2}%  equity {:>6.2}%",
                h.name,
                h.hole.join(" "),
                h.win * 100.0,
                h.tie * 100.0,
                h.equity * 100.0
            )?;
        }
        Ok(())
    }
}
