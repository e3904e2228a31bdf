use super::attacks::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveKind, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in self.pieces(color, Piece::Pawn) {
            self.generate_pawn_moves(from, color, &mut moves);
        }
        for from in self.pieces(color, Piece::Knight) {
            self.generate_step_moves(from, color, &KNIGHT_OFFSETS, &mut moves);
        }
        for from in self.pieces(color, Piece::Bishop) {
            self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::Rook) {
            self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::Queen) {
            self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, &mut moves);
            self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::King) {
            self.generate_step_moves(from, color, &KING_OFFSETS, &mut moves);
            self.generate_castling_moves(from, color, &mut moves);
        }

        moves
    }

    fn push_pawn_move(
        from: Square,
        to: Square,
        captured: Option<Piece>,
        color: Color,
        moves: &mut MoveList,
    ) {
        if color.relative_rank(to.rank()) == 7 {
            for promo in PROMOTION_PIECES {
                moves.push(Move::new(from, to, Some(promo), captured, MoveKind::Normal));
            }
        } else {
            moves.push(Move::new(from, to, None, captured, MoveKind::Normal));
        }
    }

    fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                Self::push_pawn_move(from, one, None, color, moves);

                if color.relative_rank(from.rank()) == 1 {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, None, None, MoveKind::DoublePawnPush));
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(to) = from.offset(dir, file_delta) else {
                continue;
            };
            match self.piece_at(to) {
                Some((target_color, target)) if target_color != color => {
                    Self::push_pawn_move(from, to, Some(target), color, moves);
                }
                None if self.en_passant_target == Some(to)
                    && self.piece_at(Square::at(from.rank(), to.file()))
                        == Some((color.opponent(), Piece::Pawn)) =>
                {
                    moves.push(Move::new(from, to, None, Some(Piece::Pawn), MoveKind::EnPassant));
                }
                _ => {}
            }
        }
    }

    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((target_color, target)) if target_color != color => {
                    moves.push(Move::capture(from, to, target));
                }
                Some(_) => {}
            }
        }
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::quiet(from, to));
                        cursor = to;
                    }
                    Some((target_color, target)) => {
                        if target_color != color {
                            moves.push(Move::capture(from, to, target));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        if from != Square::at(rank, 4) {
            return;
        }
        let enemy = color.opponent();
        let rook = Some((color, Piece::Rook));

        if self.castling_rights.has(color, true)
            && self.piece_at(Square::at(rank, 7)) == rook
            && self.is_empty(Square::at(rank, 5))
            && self.is_empty(Square::at(rank, 6))
            && !self.is_square_attacked(from, enemy)
            && !self.is_square_attacked(Square::at(rank, 5), enemy)
            && !self.is_square_attacked(Square::at(rank, 6), enemy)
        {
            moves.push(Move::new(
                from,
                Square::at(rank, 6),
                None,
                None,
                MoveKind::CastleKingside,
            ));
        }

        if self.castling_rights.has(color, false)
            && self.piece_at(Square::at(rank, 0)) == rook
            && self.is_empty(Square::at(rank, 1))
            && self.is_empty(Square::at(rank, 2))
            && self.is_empty(Square::at(rank, 3))
            && !self.is_square_attacked(from, enemy)
            && !self.is_square_attacked(Square::at(rank, 3), enemy)
            && !self.is_square_attacked(Square::at(rank, 2), enemy)
        {
            moves.push(Move::new(
                from,
                Square::at(rank, 2),
                None,
                None,
                MoveKind::CastleQueenside,
            ));
        }
    }

    /// Legal moves for the side to move.
    ///
    /// Pseudo-legal moves are filtered by playing each one and checking
    /// whether the mover's king is left attacked.
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let pseudo = self.generate_pseudo_moves();
        let mut legal = MoveList::new();
        for &mv in pseudo.iter() {
            if self.is_legal_pseudo_move(mv, color) {
                legal.push(mv);
            }
        }
        legal
    }

    fn is_legal_pseudo_move(&mut self, mv: Move, color: Color) -> bool {
        let info = self.make_move(mv);
        let legal = !self.is_king_attacked(color);
        self.unmake_move(mv, info);
        legal
    }

    /// True if the side to move has at least one legal move.
    pub fn has_legal_moves(&mut self) -> bool {
        let color = self.side_to_move;
        let pseudo = self.generate_pseudo_moves();
        pseudo.iter().any(|&mv| self.is_legal_pseudo_move(mv, color))
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in moves.iter() {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }

        nodes
    }
}
