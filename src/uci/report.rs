//! Protocol lines written back to the GUI.

use std::time::Duration;

use crate::board::Move;

use super::format_uci_move;

/// UCI spelling of "no move".
const NULL_MOVE: &str = "0000";

pub fn print_ready() {
    println!("readyok");
}

/// Answer a `go`. A position without legal moves reports the null move.
pub fn print_bestmove(best_move: Option<Move>) {
    let mv = best_move.map_or_else(|| NULL_MOVE.to_string(), |mv| format_uci_move(&mv));
    println!("bestmove {mv}");
}

pub fn print_perft_info(depth: usize, nodes: u64, elapsed: Duration) {
    println!(
        "info string perft depth {depth} nodes {nodes} time {}",
        elapsed.as_millis()
    );
}
