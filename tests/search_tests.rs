//! Search tests to verify the bot finds correct moves in various positions.

use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_bot::board::{Board, Piece};
use minimax_bot::bot::eval::CHECKMATE_SCORE;
use minimax_bot::bot::{Bot, BotConfig, Searcher, TimeBudget};
use minimax_bot::uci::format_uci_move;

fn bot(depth: u32) -> Bot<StdRng> {
    Bot::with_rng(
        BotConfig {
            depth,
            ..BotConfig::default()
        },
        StdRng::seed_from_u64(7),
    )
}

fn best_uci(fen: &str, depth: u32) -> String {
    let mut board = Board::from_fen(fen);
    let mv = bot(depth)
        .select_move(&mut board, &TimeBudget::unlimited())
        .expect("Should find a move");
    format_uci_move(&mv)
}

/// Test that the bot finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    assert_eq!(
        best_uci("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 1),
        "e1e8",
        "Should find Qe8# (back rank mate)"
    );
}

/// Test that the bot finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    assert_eq!(
        best_uci(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
            2
        ),
        "h5f7",
        "Should find Qxf7# (scholar's mate)"
    );
}

/// Mate for the side playing black is scored the same way
#[test]
fn finds_mate_in_one_as_black() {
    assert_eq!(best_uci("4q2k/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2), "e8e1");
}

/// Test that the bot captures a free piece
#[test]
fn captures_hanging_rook() {
    let mut board = Board::from_fen("4k3/8/8/3r4/8/8/3Q4/4K3 w - - 0 1");
    let mv = bot(2)
        .select_move(&mut board, &TimeBudget::unlimited())
        .expect("Should find a move");
    assert_eq!(mv.captured(), Some(Piece::Rook), "played {mv}");
}

/// The only legal move is returned whatever the depth
#[test]
fn plays_only_legal_move() {
    for depth in 0..=3 {
        assert_eq!(best_uci("k7/8/1K6/8/8/8/8/8 b - - 0 1", depth), "a8b8");
    }
}

#[test]
fn root_score_of_forced_mate() {
    let mut board = Board::from_fen("6rk/6pp/8/6N1/8/8/8/7K w - - 0 1");
    let mut rng = StdRng::seed_from_u64(0);
    let perspective = board.side_to_move();
    let outcome =
        Searcher::new(&mut rng, 5).search(&mut board, 1, i32::MIN, i32::MAX, true, perspective);
    assert_eq!(outcome.score, CHECKMATE_SCORE);
    assert_eq!(outcome.best_move.map(|m| m.to_string()).as_deref(), Some("g5f7"));
}

/// Full default depth from the opening; slow in debug builds.
#[test]
#[ignore = "depth 5 search is slow without optimizations"]
fn default_depth_from_start() {
    let mut board = Board::new();
    let fen = board.to_fen();
    let mut bot = Bot::new(BotConfig::default());
    let mv = bot
        .select_move(&mut board, &TimeBudget::unlimited())
        .expect("Should find a move");
    assert!(board.generate_moves().contains(&mv));
    assert_eq!(board.to_fen(), fen);
    assert!(bot.last_stats().cutoffs > 0);
}
