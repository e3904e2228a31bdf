//! Core chess types.
//!
//! This module contains the fundamental types shared by the board and the bot:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square (linear index 0-63)
//! - `Bitboard` - 64-bit square set, used for piece lists
//! - `Move`, `MoveList` and `ScoredMoveList` - move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
