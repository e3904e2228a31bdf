//! Bot module tests.
//!
//! - `eval.rs` - Piece tables, terminal scores and perspective handling
//! - `move_order.rs` - Capture ordering and the quiet-move tiebreak
//! - `search.rs` - Restoration, equivalence with plain minimax, tactics
//! - `driver.rs` - Move selection, fallback and reporting
//! - `proptest.rs` - Property-based tests over random positions

mod move_order;
mod proptest;

use crate::board::{Board, Color};
use crate::bot::eval as bot_eval;

/// Plain minimax without pruning, the reference for alpha-beta results.
pub(super) fn minimax(board: &mut Board, depth: u32, maximizing: bool, perspective: Color) -> i32 {
    if depth == 0 {
        return bot_eval::score(board, perspective);
    }
    let moves = board.generate_moves();
    if moves.is_empty() {
        return bot_eval::score(board, perspective);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for &mv in moves.iter() {
        let info = board.make_move(mv);
        let score = minimax(board, depth - 1, !maximizing, perspective);
        board.unmake_move(mv, info);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Position where the side to move has a back-rank mate with Qe8.
pub(super) const WHITE_MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1";
/// Position where the side to move has a back-rank mate with Qe1.
pub(super) const BLACK_MATE_IN_ONE: &str = "4q2k/8/8/8/8/8/5PPP/6K1 b - - 0 1";
