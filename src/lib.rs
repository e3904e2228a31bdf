//! A fixed-depth alpha-beta minimax chess bot.
//!
//! - [`board`] - board representation, move generation and game rules
//! - [`bot`] - evaluation, move ordering, search and move selection
//! - [`uci`] - Universal Chess Interface front end

pub mod board;
pub mod bot;
pub mod uci;
mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use bot::{Bot, BotConfig, TimeBudget};
