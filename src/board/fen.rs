use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number are optional and default to
    /// `0` and `1`.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::at(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let white_kings = board.pieces(Color::White, Piece::King).popcount();
        let black_kings = board.pieces(Color::Black, Piece::King).popcount();
        if white_kings != 1 || black_kings != 1 {
            return Err(FenError::KingCount {
                white: white_kings,
                black: black_kings,
            });
        }

        for color in Color::BOTH {
            if !board.has_reachable_material(color) {
                return Err(FenError::TooManyPieces { color });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target = parts[3].parse::<Square>().map_err(|_| invalid())?;
            if !board.is_valid_en_passant_target(target) {
                return Err(invalid());
            }
            Some(target)
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidCounter {
                found: (*clock).to_string(),
            })?;
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = number.parse().map_err(|_| FenError::InvalidCounter {
                found: (*number).to_string(),
            })?;
        }

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Every piece beyond the starting set needs a pawn that promoted, so
    /// pawns plus surplus pieces never exceed eight. This also bounds the
    /// number of pseudo-legal moves a position can have.
    fn has_reachable_material(&self, color: Color) -> bool {
        let count = |piece| self.pieces(color, piece).popcount();
        let surplus = |piece, start: u32| count(piece).saturating_sub(start);
        let promoted = surplus(Piece::Queen, 1)
            + surplus(Piece::Rook, 2)
            + surplus(Piece::Bishop, 2)
            + surplus(Piece::Knight, 2);
        count(Piece::Pawn) + promoted <= 8
    }

    /// An en passant target must sit behind a pawn of the side that just
    /// moved, on the square that pawn skipped, with that square empty.
    fn is_valid_en_passant_target(&self, target: Square) -> bool {
        let mover = self.side_to_move;
        let victim = self.side_to_move.opponent();
        if target.rank() != mover.relative_rank(5) || !self.is_empty(target) {
            return false;
        }
        target
            .offset(-mover.pawn_direction(), 0)
            .is_some_and(|sq| self.piece_at(sq) == Some((victim, Piece::Pawn)))
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use minimax_bot::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.generate_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}
