use poker_engine::{
    Board, CardEvaluator, Client, Dealer, Deck, EquityConfig, Hand, HandCollection, HandRank,
    PokerError, TexasHoldem,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seat(id: u32, name: &str, cards: &str) -> Hand {
    Hand::parse(cards, Client::register(id, name)).unwrap()
}

#[test]
fn dealt_round_resolves_through_the_dealer() {
    let mut dealer = Dealer::start_work(Deck::new(), TexasHoldem::new());
    dealer.shuffle_deck_with(&mut StdRng::seed_from_u64(2024));

    let mut hands = HandCollection::from_hands(
        (1..=6).map(|id| Hand::empty(Client::register(id, format!("seat{id}")))),
    )
    .unwrap();
    let mut board = Board::new();
    dealer.deal_hole_cards(&mut hands).unwrap();
    dealer.deal_board(&mut board, 5).unwrap();
    assert_eq!(dealer.deck().len(), 52 - 12 - 5);

    let ranked = dealer.evaluate_hands(&board, &mut hands).unwrap();
    assert_eq!(ranked.len(), 6);

    // Results come back best first, each group strictly above the next.
    let groups: Vec<_> = ranked.groups().collect();
    for pair in groups.windows(2) {
        assert!(pair[0][0].strength() > pair[1][0].strength());
    }

    let credited: u32 = hands.iter().map(|h| h.win_count() + h.tie_count()).sum();
    assert_eq!(credited as usize, ranked.winners().len());
}

#[test]
fn repeated_showdowns_accumulate_counters() {
    let board: Board = "2h 7d 9s Jc 3h".parse().unwrap();
    let mut hands = HandCollection::from_hands([
        seat(1, "alice", "Ad Kd"),
        seat(2, "bob", "Qs Qc"),
    ])
    .unwrap();
    let dealer = Dealer::start_work(Deck::new(), TexasHoldem::new());

    for _ in 0..3 {
        dealer.evaluate_hands(&board, &mut hands).unwrap();
    }
    assert_eq!(hands.find_by_name("bob").unwrap().win_count(), 3);
    assert_eq!(hands.find_by_name("alice").unwrap().win_count(), 0);
}

#[test]
fn everyone_plays_the_board() {
    let board: Board = "9c 9d 9h 9s Ac".parse().unwrap();
    let mut hands = HandCollection::from_hands([
        seat(1, "alice", "2c 3c"),
        seat(2, "bob", "4d 5d"),
        seat(3, "carol", "Kh Qh"),
        seat(4, "dave", "6s 7s"),
    ])
    .unwrap();
    let ranked = TexasHoldem::new().evaluate_hands(&board, &mut hands).unwrap();

    // Everyone plays quads with the board Ace.
    assert_eq!(ranked.winners().len(), 4);
    assert!(ranked.winners().iter().all(|r| r.rank() == HandRank::FourOfAKind));
    assert!(hands.iter().all(|h| h.tie_count() == 1 && h.win_count() == 0));
}

#[test]
fn empty_table_is_a_no_op() {
    let board: Board = "2h 7d 9s Jc 3h".parse().unwrap();
    let mut hands = HandCollection::<Client>::new();
    let ranked = TexasHoldem::new().evaluate_hands(&board, &mut hands).unwrap();
    assert!(ranked.is_empty());
    assert!(ranked.winner_ids().is_empty());
}

#[test]
fn handless_player_is_rejected() {
    let board: Board = "2h 7d 9s".parse().unwrap();
    let mut hands = HandCollection::from_hands([
        seat(1, "alice", "Ad Kd"),
        Hand::empty(Client::register(2, "bob")),
    ])
    .unwrap();
    assert_eq!(
        TexasHoldem::new().evaluate_hands(&board, &mut hands),
        Err(PokerError::InsufficientCards {
            required: 2,
            found: 0
        })
    );
}

#[test]
fn equity_figures_are_labelled() {
    let hands = HandCollection::from_hands([
        seat(1, "alice", "Ah Ad"),
        seat(2, "bob", "Kh Kd"),
    ])
    .unwrap();

    let exact = TexasHoldem::new()
        .evaluate_hands_equity(&"2c 7s 9d".parse().unwrap(), &hands)
        .unwrap();
    assert!(exact.is_exact());

    let sampled = TexasHoldem::with_config(EquityConfig::default().with_trials(8_000).with_seed(1))
        .evaluate_hands_equity(&Board::new(), &hands)
        .unwrap();
    assert!(!sampled.is_exact());
    let aces = sampled.get(1).unwrap().equity();
    assert!((0.78..0.86).contains(&aces), "aces equity {aces}");
}
