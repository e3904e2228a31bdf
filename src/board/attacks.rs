//! Attack detection on the mailbox board.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// True if any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn of `by` attacks sq from one rank behind (from its own point of view).
        let pawn_rank_delta = -by.pawn_direction();
        for file_delta in [-1, 1] {
            if let Some(from) = sq.offset(pawn_rank_delta, file_delta) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_OFFSETS.iter().any(|&(dr, df)| {
            sq.offset(dr, df)
                .is_some_and(|from| self.piece_at(from) == Some((by, Piece::Knight)))
        }) {
            return true;
        }

        if KING_OFFSETS.iter().any(|&(dr, df)| {
            sq.offset(dr, df)
                .is_some_and(|from| self.piece_at(from) == Some((by, Piece::King)))
        }) {
            return true;
        }

        self.slider_attacks(sq, by, &BISHOP_DIRECTIONS, Piece::Bishop)
            || self.slider_attacks(sq, by, &ROOK_DIRECTIONS, Piece::Rook)
    }

    fn slider_attacks(
        &self,
        sq: Square,
        by: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut cursor = sq;
            while let Some(next) = cursor.offset(dr, df) {
                match self.piece_at(next) {
                    None => cursor = next,
                    Some((color, piece)) => {
                        if color == by && (piece == slider || piece == Piece::Queen) {
                            return true;
                        }
                        break;
                    }
                }
            }
        }
        false
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).iter().next()
    }

    /// True if `color`'s king is attacked.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}
