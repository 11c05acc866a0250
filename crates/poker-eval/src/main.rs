//! Command-line showdown and equity calculator.
//!
//! ```text
//! poker-eval showdown --board "2h 7d 9s Jc Ah" --hand "alice=Ad Kd" --hand "bob=7h 7c"
//! poker-eval equity --board "2h 7d 9s" --hand "alice=Ad Kd" --hand "bob=7h 7c" --seed 7
//! poker-eval deal --players 4
//! ```
//!
//! Set `RUST_LOG=debug` to see which equity mode was picked.

mod view;

use std::error::Error;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use poker_engine::{
    Board, CardEvaluator, Client, Dealer, Deck, EquityConfig, Hand, HandCollection, Omaha,
    PlayerId, TexasHoldem,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use view::{EquityView, ShowdownView};

#[derive(Parser)]
#[command(name = "poker-eval")]
#[command(about = "Rank poker hands and estimate their equity", long_about = None)]
struct Cli {
    /// Game variant
    #[arg(short, long, value_enum, default_value_t = Variant::Holdem, global = true)]
    variant: Variant,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    Holdem,
    Omaha,
}

#[derive(Subcommand)]
enum Command {
    /// Rank hands against a board
    Showdown {
        #[command(flatten)]
        table: Table,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Win and tie probabilities over the cards still to come
    Equity {
        #[command(flatten)]
        table: Table,

        /// Monte Carlo trials when the board is too open to enumerate
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(short, long)]
        seed: Option<u64>,

        /// Largest number of boards still enumerated exactly
        #[arg(long)]
        exhaustive_limit: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Shuffle, deal a full round and resolve the showdown
    Deal {
        /// Players at the table
        #[arg(short, long, default_value_t = 2)]
        players: u32,

        /// Seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct Table {
    /// Board cards, e.g. "2h 7d 9s"
    #[arg(short, long, default_value = "")]
    board: String,

    /// A player's hand as name=cards, e.g. "alice=Ad Kd"; repeat per player
    #[arg(long = "hand", value_parser = parse_seat)]
    hands: Vec<(String, String)>,
}

impl Table {
    /// Players get ids in argument order, starting at 1.
    fn parse(&self) -> Result<(Board, HandCollection), Box<dyn Error>> {
        let board: Board = self.board.parse()?;
        let hands = HandCollection::from_hands(
            self.hands
                .iter()
                .enumerate()
                .map(|(i, (name, cards))| {
                    Hand::parse(cards, Client::register(i as PlayerId + 1, name.as_str()))
                })
                .collect::<poker_engine::Result<Vec<_>>>()?,
        )?;
        Ok((board, hands))
    }
}

fn parse_seat(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, cards)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), cards.trim().to_string()))
        }
        _ => Err(format!("expected name=cards, got '{arg}'")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.variant {
        Variant::Holdem => run(cli.command, TexasHoldem::with_config),
        Variant::Omaha => run(cli.command, Omaha::with_config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<E, F>(command: Command, variant: F) -> Result<(), Box<dyn Error>>
where
    E: CardEvaluator,
    F: Fn(EquityConfig) -> E,
{
    match command {
        Command::Showdown { table, json } => {
            let (board, mut hands) = table.parse()?;
            let evaluator = variant(EquityConfig::default());
            let ranked = evaluator.evaluate_hands(&board, &mut hands)?;
            emit(
                &ShowdownView::new(evaluator.name(), &board, &hands, &ranked),
                json,
            )
        }
        Command::Equity {
            table,
            trials,
            seed,
            exhaustive_limit,
            json,
        } => {
            let (board, hands) = table.parse()?;
            let mut config = EquityConfig::default();
            if let Some(trials) = trials {
                config = config.with_trials(trials);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(limit) = exhaustive_limit {
                config = config.with_exhaustive_limit(limit);
            }
            let evaluator = variant(config);
            let report = evaluator.evaluate_hands_equity(&board, &hands)?;
            emit(&EquityView::new(evaluator.name(), &board, &hands, &report), json)
        }
        Command::Deal {
            players,
            seed,
            json,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(players, seed, "Dealing a round");

            let mut dealer = Dealer::start_work(Deck::new(), variant(EquityConfig::default()));
            dealer.shuffle_deck_with(&mut StdRng::seed_from_u64(seed));

            let mut hands = HandCollection::from_hands(
                (1..=players).map(|id| Hand::empty(Client::register(id, format!("player{id}")))),
            )?;
            let mut board = Board::new();
            dealer.deal_hole_cards(&mut hands)?;
            let open = dealer.evaluator().board_cards();
            dealer.deal_board(&mut board, open)?;

            let ranked = dealer.evaluate_hands(&board, &mut hands)?;
            emit(
                &ShowdownView::new(dealer.evaluator().name(), &board, &hands, &ranked),
                json,
            )
        }
    }
}

fn emit<V>(view: &V, json: bool) -> Result<(), Box<dyn Error>>
where
    V: serde::Serialize + std::fmt::Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{view}");
    }
    Ok(())
}
