//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Every node is scored from one fixed perspective; only the maximizing flag
//! alternates between plies. Moves are applied through [`MoveGuard`], so the
//! position is back in its original state whenever a call returns.

use log::trace;
use rand::Rng;

use crate::board::{Color, Move};

use super::eval;
use super::move_order::order_moves;
use super::position::{MoveGuard, Position};

/// Counters for the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Move loops abandoned because the window closed
    pub cutoffs: u64,
}

/// Best move found at a node and its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
}

impl SearchOutcome {
    fn leaf(score: i32) -> Self {
        SearchOutcome {
            best_move: None,
            score,
        }
    }
}

/// One search over a position, drawing quiet-move tiebreaks from `rng`.
pub struct Searcher<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    quiet_jitter: i32,
    stats: SearchStats,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    pub fn new(rng: &'a mut R, quiet_jitter: i32) -> Self {
        Searcher {
            rng,
            quiet_jitter,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn evaluate<P: Position>(&mut self, position: &mut P, perspective: Color) -> SearchOutcome {
        self.stats.leaves += 1;
        SearchOutcome::leaf(eval::score(position, perspective))
    }

    /// Search `depth` plies below `position`.
    ///
    /// `perspective` stays fixed through the whole tree. `maximizing` says
    /// whether the side to move at this node picks the highest or the lowest
    /// child score. The search stops looping over moves once the best score
    /// reaches `beta` (maximizing) or falls to `alpha` (minimizing).
    pub fn search<P: Position>(
        &mut self,
        position: &mut P,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Color,
    ) -> SearchOutcome {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.evaluate(position, perspective);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            debug_assert!(
                position.is_checkmate() || position.is_draw(),
                "no legal moves in a position that is neither checkmate nor draw"
            );
            return self.evaluate(position, perspective);
        }

        let ordered = order_moves(&moves, &mut *self.rng, self.quiet_jitter);

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in ordered.moves() {
            let score = {
                let mut child = MoveGuard::new(position, mv);
                self.search(&mut *child, depth - 1, alpha, beta, !maximizing, perspective)
                    .score
            };

            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                best_move = Some(mv);
                if maximizing {
                    alpha = alpha.max(best);
                } else {
                    beta = beta.min(best);
                }
            }

            let window_closed = if maximizing { best >= beta } else { best <= alpha };
            if window_closed {
                self.stats.cutoffs += 1;
                trace!("cutoff at depth {depth} after {mv}: best {best}, window [{alpha}, {beta}]");
                break;
            }
        }

        SearchOutcome {
            best_move,
            score: best,
        }
    }
}
