//! Top-level move selection.

use std::time::Instant;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Move;

use super::config::BotConfig;
use super::log::{SearchInfo, SearchLogger};
use super::position::Position;
use super::search::{SearchStats, Searcher};
use super::time::TimeBudget;

/// Picks one move per position with a fixed-depth alpha-beta search.
///
/// The bot keeps no game state between calls apart from its random source,
/// which shuffles quiet moves during ordering.
pub struct Bot<R: Rng = StdRng> {
    config: BotConfig,
    rng: R,
    logger: Option<Box<dyn SearchLogger>>,
    last_stats: SearchStats,
}

impl Bot<StdRng> {
    /// A bot seeded from operating system entropy.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Bot::with_rng(config, StdRng::from_entropy())
    }
}

impl Default for Bot<StdRng> {
    fn default() -> Self {
        Bot::new(BotConfig::default())
    }
}

impl<R: Rng> Bot<R> {
    pub fn with_rng(config: BotConfig, rng: R) -> Self {
        Bot {
            config,
            rng,
            logger: None,
            last_stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BotConfig {
        &mut self.config
    }

    /// Report every completed search to `logger`.
    pub fn set_logger(&mut self, logger: Box<dyn SearchLogger>) {
        self.logger = Some(logger);
    }

    /// Counters from the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Choose a move for the side to move at the configured depth.
    ///
    /// Returns `None` only when the position has no legal move.
    pub fn select_move<P: Position>(&mut self, position: &mut P, budget: &TimeBudget) -> Option<Move> {
        let depth = self.config.depth;
        self.select_move_at_depth(position, depth, budget)
    }

    /// Choose a move searching exactly `depth` plies.
    ///
    /// The budget is logged but does not limit the search. If the search
    /// yields no move, the first legal move is played instead.
    pub fn select_move_at_depth<P: Position>(
        &mut self,
        position: &mut P,
        depth: u32,
        budget: &TimeBudget,
    ) -> Option<Move> {
        let perspective = position.side_to_move();
        debug!("searching depth {depth} for {perspective} with clock {budget}");

        let start = Instant::now();
        let mut searcher = Searcher::new(&mut self.rng, self.config.quiet_jitter);
        let outcome = searcher.search(position, depth, i32::MIN, i32::MAX, true, perspective);
        self.last_stats = searcher.stats();
        let elapsed = start.elapsed();

        debug!(
            "search done: score {} nodes {} leaves {} cutoffs {} in {}ms",
            outcome.score,
            self.last_stats.nodes,
            self.last_stats.leaves,
            self.last_stats.cutoffs,
            elapsed.as_millis()
        );

        if let Some(logger) = &self.logger {
            logger.info(&SearchInfo {
                depth,
                score: outcome.score,
                stats: self.last_stats,
                elapsed,
                best_move: outcome.best_move,
            });
        }

        if outcome.best_move.is_some() {
            return outcome.best_move;
        }

        let fallback = position.legal_moves().first();
        if let Some(mv) = fallback {
            warn!("search returned no move at depth {depth}, playing first legal move {mv}");
        }
        fallback
    }
}
