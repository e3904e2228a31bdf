//! Static evaluation: material plus per-square modifiers, scored from a
//! fixed perspective.

use crate::board::{Color, Piece, Square};

use super::position::Position;

/// Returned for a checkmated side to move, whatever the perspective.
pub const CHECKMATE_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;
/// Added whenever the side to move is in check, without sign adjustment.
pub const IN_CHECK_BONUS: i32 = 400;

/// Material value of a piece kind in centipawns.
#[inline]
#[must_use]
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 300,
        Piece::Bishop => 300,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 10_000,
    }
}

#[inline]
fn on_edge(sq: Square) -> bool {
    sq.rank() == 0 || sq.rank() == 7 || sq.file() == 0 || sq.file() == 7
}

/// Square bonus for a piece kind. The tables are the same for both colors.
#[must_use]
pub fn positional_modifier(piece: Piece, sq: Square) -> i32 {
    let rank = sq.rank() as i32;
    let file = sq.file() as i32;
    let index = sq.index() as i32;

    match piece {
        Piece::Pawn => {
            if rank > 3 {
                30
            } else if rank == 2 && file > 2 && file < 5 {
                20
            } else {
                0
            }
        }
        Piece::Knight => {
            if on_edge(sq) {
                -40
            } else {
                ((4 - (rank - 4).abs()) + (4 - (index - 4).abs())) * 10
            }
        }
        Piece::Bishop => {
            if on_edge(sq) {
                -10
            } else {
                1
            }
        }
        Piece::Rook => {
            if rank == 0 || file == 0 || file == 7 {
                -10
            } else if file == 6 {
                10
            } else {
                0
            }
        }
        Piece::Queen => {
            if on_edge(sq) {
                -10
            } else {
                0
            }
        }
        Piece::King => {
            if rank > 2 {
                -20
            } else if index < 3 || index > 5 {
                20
            } else {
                0
            }
        }
    }
}

/// Material and placement of every piece of one color and kind.
fn piece_list_score<P: Position>(position: &P, color: Color, piece: Piece) -> i32 {
    let squares = position.pieces(color, piece);
    let material = piece_value(piece) * squares.popcount() as i32;
    let placement: i32 = squares.iter().map(|sq| positional_modifier(piece, sq)).sum();
    material + placement
}

/// Score `position` for `perspective`.
///
/// Checkmate of the side to move yields [`CHECKMATE_SCORE`] and a draw yields
/// [`DRAW_SCORE`]. Otherwise every piece list counts positively for
/// `perspective` and negatively for the other color, and [`IN_CHECK_BONUS`]
/// is added if the side to move is in check.
pub fn score<P: Position>(position: &mut P, perspective: Color) -> i32 {
    if position.is_checkmate() {
        return CHECKMATE_SCORE;
    }
    if position.is_draw() {
        return DRAW_SCORE;
    }

    let mut total = 0;
    for color in Color::BOTH {
        let sign = if color == perspective { 1 } else { -1 };
        for piece in Piece::ALL {
            total += sign * piece_list_score(position, color, piece);
        }
    }

    if position.is_in_check() {
        total += IN_CHECK_BONUS;
    }
    total
}
