//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Talks to chess GUIs over the UCI text protocol on stdin and stdout.
//! Searches run synchronously, so `stop` has nothing to interrupt.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, warn};

use crate::board::{Board, FenError, Move, MoveParseError};
use crate::bot::log::StdoutLogger;
use crate::bot::{Bot, BotConfig};

pub mod command;
pub mod options;
pub mod report;
pub mod time;

use command::{parse_uci_command, UciCommand};
use options::{apply_setoption, clamp_depth, print_options};
use report::{print_bestmove, print_perft_info, print_ready};
use time::parse_go;

/// Error type for UCI command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
    /// `setoption` named an option the bot does not have
    UnknownOption(String),
    /// `setoption` value could not be parsed
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in command"),
            UciError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            UciError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::InvalidMove { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a move in UCI format (e.g., "e2e4", "e7e8q").
///
/// Delegates to `Board::parse_move`. Returns `None` if the move is invalid.
#[must_use]
pub fn parse_uci_move(board: &mut Board, uci_string: &str) -> Option<Move> {
    board.parse_move(uci_string).ok()
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN may omit its
/// move counters.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    if i >= parts.len() {
        return Err(UciError::MissingParts);
    }

    // Built aside so a bad move leaves `board` untouched
    let mut position = if parts[i] == "startpos" {
        i += 1;
        Board::new()
    } else if parts[i] == "fen" {
        let fen_end = parts
            .iter()
            .position(|p| *p == "moves")
            .unwrap_or(parts.len());
        if fen_end <= i + 1 {
            return Err(UciError::MissingParts);
        }
        let fen = parts[i + 1..fen_end].join(" ");
        i = fen_end;
        Board::try_from_fen(&fen)?
    } else {
        return Err(UciError::MissingParts);
    };

    if i < parts.len() && parts[i] == "moves" {
        for move_str in &parts[i + 1..] {
            let mv = position
                .parse_move(move_str)
                .map_err(|e| UciError::InvalidMove {
                    move_str: (*move_str).to_string(),
                    error: e,
                })?;
            let _ = position.make_move(mv);
        }
    }

    *board = position;
    Ok(())
}

/// Parse a UCI position command, logging errors on failure.
///
/// This is a convenience wrapper around `try_parse_position_command` for
/// use in the main UCI loop where errors should be logged but not propagated.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        warn!("{e}");
    }
}

#[must_use]
pub fn format_uci_move(mv: &Move) -> String {
    mv.to_string()
}

/// Board and bot state for one UCI connection.
pub struct UciSession {
    board: Board,
    bot: Bot,
}

impl Default for UciSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UciSession {
    #[must_use]
    pub fn new() -> Self {
        let mut bot = Bot::new(BotConfig::default());
        bot.set_logger(Box::new(StdoutLogger));
        UciSession {
            board: Board::new(),
            bot,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        self.bot.config()
    }

    /// Depth for one `go`: the requested depth clamped like the `Depth`
    /// option, or the configured depth.
    fn search_depth(&self, requested: Option<u32>) -> u32 {
        requested.map_or(self.bot.config().depth, clamp_depth)
    }

    /// Execute one command. Returns `false` once the session should end.
    pub fn handle_command(&mut self, cmd: UciCommand) -> bool {
        match cmd {
            UciCommand::Uci => print_options(self.bot.config()),
            UciCommand::IsReady => print_ready(),
            UciCommand::UciNewGame => self.board = Board::new(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut self.board, &parts);
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let go = parse_go(&parts, self.board.side_to_move());
                let depth = self.search_depth(go.depth);
                let best = self
                    .bot
                    .select_move_at_depth(&mut self.board, depth, &go.budget);
                print_bestmove(best);
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.board.perft(depth);
                print_perft_info(depth, nodes, start.elapsed());
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Err(e) = apply_setoption(self.bot.config_mut(), &parts) {
                    warn!("{e}");
                }
            }
            UciCommand::Stop => {}
            UciCommand::Quit => return false,
            UciCommand::Unknown(line) => debug!("ignoring unknown command '{line}'"),
        }
        true
    }

    /// Parse and execute one input line. Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match parse_uci_command(line) {
            Some(cmd) => self.handle_command(cmd),
            None => true,
        }
    }
}

/// Serve UCI on stdin/stdout until `quit` or end of input.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = UciSession::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let keep_going = session.handle_line(&line);
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}
