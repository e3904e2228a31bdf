//! Property-based tests for the search core.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use super::minimax;
use crate::board::{Board, Color};
use crate::bot::eval::score;
use crate::bot::search::Searcher;

fn random_position(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        let _ = board.make_move(mv);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: swapping perspective negates the score of quiet positions
    #[test]
    fn prop_eval_sign_symmetry(seed in any::<u64>(), plies in 0..30usize) {
        let mut board = random_position(seed, plies);
        prop_assume!(!board.is_checkmate() && !board.is_draw() && !board.is_in_check());
        let white = score(&mut board, Color::White);
        let black = score(&mut board, Color::Black);
        prop_assert_eq!(white, -black);
    }

    /// Property: a search leaves the position exactly as it found it
    #[test]
    fn prop_search_restores_position(seed in any::<u64>(), plies in 0..20usize, depth in 0..3u32) {
        let mut board = random_position(seed, plies);
        let fen = board.to_fen();
        let hash = board.hash();
        let history = board.history.clone();

        let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37);
        let perspective = board.side_to_move();
        Searcher::new(&mut rng, 5).search(&mut board, depth, i32::MIN, i32::MAX, true, perspective);

        prop_assert_eq!(board.to_fen(), fen);
        prop_assert_eq!(board.hash(), hash);
        prop_assert_eq!(board.history.clone(), history);
    }

    /// Property: pruning never changes the root value
    #[test]
    fn prop_alpha_beta_equals_minimax(seed in any::<u64>(), plies in 0..20usize) {
        let mut board = random_position(seed, plies);
        let perspective = board.side_to_move();
        let expected = minimax(&mut board, 2, true, perspective);

        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = Searcher::new(&mut rng, 0)
            .search(&mut board, 2, i32::MIN, i32::MAX, true, perspective);
        prop_assert_eq!(outcome.score, expected);
    }
}
