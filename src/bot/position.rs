//! The narrow view of a chess position the bot searches over.
//!
//! The search never copies a position. It mutates one in place and restores
//! it through [`MoveGuard`], which undoes its move exactly once when dropped.

use std::ops::{Deref, DerefMut};

use crate::board::{Bitboard, Board, Color, Move, MoveList, Piece, UnmakeInfo};

/// Game-rule operations the bot consumes.
///
/// `make_move` returns an undo token that must be handed back to
/// `unmake_move` with the same move, in strict reverse order of creation.
pub trait Position {
    type Undo;

    fn side_to_move(&self) -> Color;

    /// Currently legal moves; empty only at checkmate or stalemate.
    fn legal_moves(&mut self) -> MoveList;

    fn make_move(&mut self, mv: Move) -> Self::Undo;

    fn unmake_move(&mut self, mv: Move, undo: Self::Undo);

    /// True if the side to move is checkmated.
    fn is_checkmate(&mut self) -> bool;

    fn is_draw(&mut self) -> bool;

    /// True if the side to move is in check.
    fn is_in_check(&self) -> bool;

    /// Squares of one color's pieces of one kind.
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard;
}

impl Position for Board {
    type Undo = UnmakeInfo;

    #[inline]
    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    #[inline]
    fn legal_moves(&mut self) -> MoveList {
        self.generate_moves()
    }

    #[inline]
    fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        Board::make_move(self, mv)
    }

    #[inline]
    fn unmake_move(&mut self, mv: Move, undo: UnmakeInfo) {
        Board::unmake_move(self, mv, undo);
    }

    fn is_checkmate(&mut self) -> bool {
        Board::is_checkmate(self)
    }

    fn is_draw(&mut self) -> bool {
        Board::is_draw(self)
    }

    fn is_in_check(&self) -> bool {
        Board::is_in_check(self)
    }

    #[inline]
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        Board::pieces(self, color, piece)
    }
}

/// A move applied to a position for the lifetime of the guard.
///
/// Dereferences to the position in its post-move state. Dropping the guard,
/// including on an early `break` or `return`, takes the move back.
pub struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
    mv: Move,
    undo: Option<P::Undo>,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    pub fn new(position: &'a mut P, mv: Move) -> Self {
        let undo = position.make_move(mv);
        MoveGuard {
            position,
            mv,
            undo: Some(undo),
        }
    }

    /// The move this guard applied.
    #[inline]
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.position.unmake_move(self.mv, undo);
        }
    }
}
