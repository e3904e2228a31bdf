use crate::zobrist::ZOBRIST;

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Everything `make_move` overwrites that the move itself cannot restore.
///
/// Returned by [`Board::make_move`] and consumed by [`Board::unmake_move`];
/// tokens must be handed back in reverse order of creation.
#[derive(Clone, Debug)]
#[must_use = "an UnmakeInfo must be passed back to unmake_move"]
pub struct UnmakeInfo {
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_hash: u64,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) hash: u64, // Zobrist hash
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // Hashes of every earlier position in the game, oldest first
    pub(crate) history: Vec<u64>,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::at(0, file), Color::White, *piece);
            board.set_piece(Square::at(7, file), Color::Black, *piece);
            board.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.hash = board.calculate_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            hash: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Place a piece, keeping the mailbox, bitboards and hash in step.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_none(), "set_piece on occupied {sq}");
        self.squares[sq.index()] = Some((color, piece));
        self.pieces[color.index()][piece.index()].insert(sq);
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Remove whatever stands on `sq` and return it.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let taken = self.squares[sq.index()].take();
        if let Some((color, piece)) = taken {
            self.pieces[color.index()][piece.index()].remove(sq);
            self.hash ^= ZOBRIST.piece(color, piece, sq);
        }
        taken
    }

    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    /// Piece and color standing on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Squares holding pieces of one color and kind
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Draw by stalemate, the fifty-move rule, insufficient material or repetition.
    ///
    /// A position counts as repeated as soon as it occurs a second time since
    /// the last capture or pawn move.
    pub fn is_draw(&mut self) -> bool {
        self.halfmove_clock >= 100
            || self.is_repetition()
            || self.is_insufficient_material()
            || self.is_stalemate()
    }

    /// True when the current position already occurred since the last irreversible move.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        self.history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .any(|&earlier| earlier == self.hash)
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let heavy_or_pawn = [Piece::Pawn, Piece::Rook, Piece::Queen];
        if Color::BOTH
            .iter()
            .any(|&c| heavy_or_pawn.iter().any(|&p| !self.pieces(c, p).is_empty()))
        {
            return false;
        }

        let knights = self
            .pieces(Color::White, Piece::Knight)
            .or(self.pieces(Color::Black, Piece::Knight));
        let bishops = self
            .pieces(Color::White, Piece::Bishop)
            .or(self.pieces(Color::Black, Piece::Bishop));

        let total_minors = knights.popcount() + bishops.popcount();
        if total_minors <= 1 {
            return true;
        }

        knights.is_empty() && bishops_all_same_color(bishops)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn bishops_all_same_color(bishops: Bitboard) -> bool {
    bishops.and(Bitboard::LIGHT_SQUARES).is_empty() || bishops.and(Bitboard::DARK_SQUARES).is_empty()
}
