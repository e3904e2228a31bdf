//! Make/unmake move tests.

use super::{find_move, sq};
use crate::board::{Board, Color, Move, MoveKind, Piece, UnmakeInfo};
use rand::prelude::*;

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original_fen = board.to_fen();
    let original_hash = board.hash();
    let mv = find_move(&mut board, "e5", "f6", None);
    assert_eq!(mv.kind(), MoveKind::EnPassant);
    assert_eq!(mv.captured(), Some(Piece::Pawn));

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.hash(), board.calculate_hash());

    board.unmake_move(mv, info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.to_fen(), original_fen);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original_hash = board.hash();
    let mv = find_move(&mut board, "a7", "b8", Some(Piece::Queen));
    assert_eq!(mv.captured(), Some(Piece::Rook));

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Queen)));
    assert!(board.pieces(Color::White, Piece::Pawn).is_empty());
    assert!(board.pieces(Color::Black, Piece::Rook).is_empty());

    board.unmake_move(mv, info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("b8")), Some((Color::Black, Piece::Rook)));
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original_fen = board.to_fen();

    let kingside = find_move(&mut board, "e1", "g1", None);
    assert_eq!(kingside.kind(), MoveKind::CastleKingside);
    let info = board.make_move(kingside);
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(sq("h1")), None);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));
    assert_eq!(board.hash(), board.calculate_hash());
    board.unmake_move(kingside, info);
    assert_eq!(board.to_fen(), original_fen);

    let queenside = find_move(&mut board, "e1", "c1", None);
    assert_eq!(queenside.kind(), MoveKind::CastleQueenside);
    let info = board.make_move(queenside);
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(sq("a1")), None);
    board.unmake_move(queenside, info);
    assert_eq!(board.to_fen(), original_fen);
}

#[test]
fn test_rook_capture_removes_castling_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, "a1", "a8", None);
    let _ = board.make_move(mv);
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(!board.castling_rights().has(Color::Black, false));
    assert!(board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::Black, true));
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn test_no_castling_through_check() {
    // Black bishop on c4 covers f1
    let mut board = Board::from_fen("r3k2r/8/8/8/2b5/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut board = Board::new();
    let mv = find_move(&mut board, "e2", "e4", None);
    assert_eq!(mv.kind(), MoveKind::DoublePawnPush);
    let info = board.make_move(mv);
    assert_eq!(board.en_passant_target(), Some(sq("e3")));
    assert_eq!(board.side_to_move(), Color::Black);
    board.unmake_move(mv, info);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn test_random_playout_restores_position() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..20 {
        let mut board = Board::new();
        let start_fen = board.to_fen();
        let mut played: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..60 {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv);
            assert_eq!(board.hash(), board.calculate_hash(), "after {mv}");
            played.push((mv, info));
        }

        while let Some((mv, info)) = played.pop() {
            board.unmake_move(mv, info);
        }
        assert_eq!(board.to_fen(), start_fen);
        assert_eq!(board.hash(), Board::new().hash());
    }
}

#[test]
fn test_en_passant_target_without_victim_is_ignored() {
    assert!(Board::try_from_fen("4k3/8/8/8/8/3P4/8/4K3 w - e4 0 1").is_err());

    let mut board = Board::from_fen("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1");
    board.en_passant_target = Some(sq("e4"));
    let before = board.to_fen();

    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| m.kind() != MoveKind::EnPassant));
    assert_eq!(board.to_fen(), before);
    assert_eq!(board.piece_at(sq("e3")), None);
}
