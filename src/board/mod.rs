//! Chess board representation and game rules.
//!
//! A mailbox board with per-piece bitboards, full legal move generation
//! (castling, en passant, promotions), Zobrist hashing and draw detection.
//! The bot only talks to the board through the [`crate::bot::Position`] trait.
//!
//! # Example
//! ```
//! use minimax_bot::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use state::{Board, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveKind, MoveList, Piece, ScoredMove,
    ScoredMoveList, Square,
};

pub(crate) use types::PROMOTION_PIECES;
