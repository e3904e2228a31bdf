use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::mock::StepRng;

use crate::board::{Board, Move, Piece};
use crate::bot::eval::piece_value;
use crate::bot::move_order::order_moves;

#[test]
fn test_captures_ordered_by_victim_value() {
    // The d4 pawn can take the queen on c5 or the rook on e5
    let mut board = Board::from_fen("4k3/8/8/2q1r3/3P4/8/8/K7 w - - 0 1");
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(1);
    let ordered = order_moves(&moves, &mut rng, 5);

    let first: Vec<Move> = ordered.moves().take(2).collect();
    assert_eq!(first[0].to_string(), "d4c5");
    assert_eq!(first[1].to_string(), "d4e5");
    assert_eq!(ordered.as_slice()[0].score, 900);
    assert_eq!(ordered.as_slice()[1].score, 500);
    for scored in &ordered.as_slice()[2..] {
        assert!(!scored.mv.is_capture());
        assert!((0..5).contains(&scored.score));
    }
    assert_eq!(ordered.len(), moves.len());
}

#[test]
fn test_en_passant_counts_as_pawn_capture() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let moves = board.generate_moves();
    let ordered = order_moves(&moves, &mut StepRng::new(0, 0), 5);
    let ep = ordered
        .as_slice()
        .iter()
        .find(|s| s.mv.to_string() == "e5f6")
        .expect("en passant available");
    assert_eq!(ep.score, piece_value(Piece::Pawn));
    assert_eq!(ordered.moves().next(), Some(ep.mv));
}

#[test]
fn test_minor_capture_precedes_quiet_moves() {
    // Knight on d5 can take the knight on f6; everything else is quiet
    let mut board = Board::from_fen("4k3/8/5n2/3N4/8/8/8/K7 w - - 0 1");
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let ordered = order_moves(&moves, &mut rng, 299);
        let first = ordered.moves().next().expect("moves exist");
        assert_eq!(first.to_string(), "d5f6");
        assert_eq!(first.captured(), Some(Piece::Knight));
    }
}

#[test]
fn test_zero_jitter_keeps_generation_order() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let ordered = order_moves(&moves, &mut StdRng::seed_from_u64(3), 0);
    let reordered: Vec<Move> = ordered.moves().collect();
    assert_eq!(reordered.as_slice(), moves.as_slice());
    assert!(ordered.as_slice().iter().all(|s| s.score == 0));
}

#[test]
fn test_constant_rng_keeps_generation_order() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let ordered = order_moves(&moves, &mut StepRng::new(0, 0), 5);
    let reordered: Vec<Move> = ordered.moves().collect();
    assert_eq!(reordered.as_slice(), moves.as_slice());
}

#[test]
fn test_quiet_tiebreak_distribution() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(2024);

    let mut seen_scores = HashSet::new();
    let mut seen_first = HashSet::new();
    for _ in 0..200 {
        let ordered = order_moves(&moves, &mut rng, 5);
        for scored in ordered.as_slice() {
            assert!((0..5).contains(&scored.score));
            seen_scores.insert(scored.score);
        }
        let scores: Vec<i32> = ordered.as_slice().iter().map(|s| s.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        seen_first.insert(ordered.moves().next().expect("moves exist"));
    }

    assert_eq!(seen_scores.len(), 5);
    assert!(seen_first.len() > 1);
}
