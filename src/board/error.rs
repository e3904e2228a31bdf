//! Errors raised while reading positions, moves and squares from text.

use std::fmt;

use super::Color;

/// A FEN string that does not describe a playable position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement, side, castling and en passant fields are all required
    TooFewParts { found: usize },
    InvalidPiece { char: char },
    InvalidCastling { char: char },
    InvalidSideToMove { found: String },
    InvalidEnPassant { found: String },
    /// The placement field has more or fewer than eight ranks
    InvalidRank { rank: usize },
    TooManyFiles { rank: usize, files: usize },
    KingCount { white: u32, black: u32 },
    /// More pawns and promoted pieces than eight pawns could account for
    TooManyPieces { color: Color },
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "expected at least 4 FEN fields, got {found}")
            }
            FenError::InvalidPiece { char } => write!(f, "unknown piece letter '{char}'"),
            FenError::InvalidCastling { char } => write!(f, "unknown castling flag '{char}'"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move is '{found}', not 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "en passant field '{found}' is not a square or '-'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "placement field has {rank} ranks, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "rank {rank} spans {files} files")
            }
            FenError::KingCount { white, black } => write!(
                f,
                "position has {white} white and {black} black kings, expected one each"
            ),
            FenError::TooManyPieces { color } => {
                write!(f, "{color} has more material than promotions allow")
            }
            FenError::InvalidCounter { found } => write!(f, "move counter '{found}' is not a number"),
        }
    }
}

impl std::error::Error for FenError {}

/// A UCI move string that cannot be played in the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    InvalidLength { len: usize },
    InvalidSquare { notation: String },
    /// Only n, b, r and q are promotion letters
    InvalidPromotion { char: char },
    /// Well-formed, but not among the legal moves
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move has {len} characters, expected 4 or 5")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "'{notation}' does not name two squares")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "cannot promote to '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not legal here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "rank {rank} is off the board"),
            SquareError::FileOutOfBounds { file } => write!(f, "file {file} is off the board"),
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square")
            }
        }
    }
}

impl std::error::Error for SquareError {}
