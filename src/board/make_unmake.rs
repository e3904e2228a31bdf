use crate::zobrist::ZOBRIST;

use super::{Board, Color, Move, MoveKind, Piece, Square, UnmakeInfo};

/// Rook origin and destination files for a castling move.
#[inline]
fn castling_rook_files(kind: MoveKind) -> Option<(usize, usize)> {
    match kind {
        MoveKind::CastleKingside => Some((7, 5)),
        MoveKind::CastleQueenside => Some((0, 3)),
        _ => None,
    }
}

/// Square of the pawn removed by an en passant capture.
#[inline]
fn en_passant_victim(m: Move) -> Square {
    Square::at(m.from().rank(), m.to().file())
}

impl Board {
    /// Play `m`, which must be pseudo-legal for the side to move.
    ///
    /// The returned token restores the position when passed to
    /// [`Board::unmake_move`] together with the same move.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_hash: self.hash,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };
        self.history.push(self.hash);

        let color = self.side_to_move;

        if let Some(old_ep) = self.en_passant_target.take() {
            self.hash ^= ZOBRIST.en_passant(old_ep);
        }
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        if m.kind() == MoveKind::EnPassant {
            self.remove_piece(en_passant_victim(m));
        } else if m.is_capture() {
            self.remove_piece(m.to());
        }

        let (_, moving_piece) = self
            .remove_piece(m.from())
            .expect("make_move: 'from' square empty");
        self.set_piece(m.to(), color, m.promotion().unwrap_or(moving_piece));

        if let Some((rook_from, rook_to)) = castling_rook_files(m.kind()) {
            let rank = color.back_rank();
            self.remove_piece(Square::at(rank, rook_from));
            self.set_piece(Square::at(rank, rook_to), color, Piece::Rook);
        }

        if m.kind() == MoveKind::DoublePawnPush {
            let ep = Square::at((m.from().rank() + m.to().rank()) / 2, m.from().file());
            self.en_passant_target = Some(ep);
            self.hash ^= ZOBRIST.en_passant(ep);
        }

        if moving_piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        // Any move from or onto a rook corner ends that corner's castling right.
        for corner in [m.from(), m.to()] {
            match (corner.rank(), corner.file()) {
                (0, 0) => self.castling_rights.remove(Color::White, false),
                (0, 7) => self.castling_rights.remove(Color::White, true),
                (7, 0) => self.castling_rights.remove(Color::Black, false),
                (7, 7) => self.castling_rights.remove(Color::Black, true),
                _ => {}
            }
        }
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        if moving_piece == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = color.opponent();
        self.hash ^= ZOBRIST.black_to_move();

        info
    }

    /// Take back `m`, restoring the position from before the matching `make_move`.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;

        let (_, placed) = self
            .remove_piece(m.to())
            .expect("unmake_move: 'to' square empty");
        let original = if m.promotion().is_some() {
            Piece::Pawn
        } else {
            placed
        };
        self.set_piece(m.from(), color, original);

        if let Some((rook_from, rook_to)) = castling_rook_files(m.kind()) {
            let rank = color.back_rank();
            self.remove_piece(Square::at(rank, rook_to));
            self.set_piece(Square::at(rank, rook_from), color, Piece::Rook);
        }

        if let Some(captured) = m.captured() {
            let victim_square = if m.kind() == MoveKind::EnPassant {
                en_passant_victim(m)
            } else {
                m.to()
            };
            self.set_piece(victim_square, color.opponent(), captured);
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
        self.history.pop();
    }
}
