use std::time::Duration;

use crate::board::Move;

use super::search::SearchStats;

/// Summary of one completed search.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    pub best_move: Option<Move>,
}

impl SearchInfo {
    /// Nodes per second, zero when no measurable time passed.
    #[must_use]
    pub fn nps(&self) -> u64 {
        let micros = self.elapsed.as_micros();
        if micros == 0 {
            return 0;
        }
        (u128::from(self.stats.nodes) * 1_000_000 / micros) as u64
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Prints each search as a UCI `info` line.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        let pv = info.best_move.map(|mv| mv.to_string()).unwrap_or_default();
        println!(
            "info depth {} score cp {} nodes {} nps {} time {} pv {}",
            info.depth,
            info.score,
            info.stats.nodes,
            info.nps(),
            info.elapsed.as_millis(),
            pv
        );
    }
}
