//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation correctness against known node counts
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material, stalemate)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use crate::board::{Board, Move, Piece, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn find_move(board: &mut Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    let (from, to) = (sq(from), sq(to));
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion() == promotion {
            return *m;
        }
    }
    panic!("Expected move not found");
}

pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        let mv = board.parse_move(uci).expect("uci move not legal");
        let _ = board.make_move(mv);
    }
}
