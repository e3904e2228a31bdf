//! The move-picking core: evaluation, move ordering, alpha-beta search and
//! the driver that ties them together.
//!
//! # Example
//! ```
//! use minimax_bot::board::Board;
//! use minimax_bot::bot::{Bot, BotConfig, TimeBudget};
//!
//! let mut board = Board::new();
//! let mut bot = Bot::new(BotConfig { depth: 2, ..BotConfig::default() });
//! let mv = bot.select_move(&mut board, &TimeBudget::unlimited());
//! assert!(mv.is_some());
//! ```

pub mod config;
pub mod driver;
pub mod eval;
pub mod log;
pub mod move_order;
pub mod position;
pub mod search;
pub mod time;

#[cfg(test)]
mod tests;

pub use config::BotConfig;
pub use driver::Bot;
pub use position::{MoveGuard, Position};
pub use search::{SearchOutcome, SearchStats, Searcher};
pub use time::TimeBudget;
