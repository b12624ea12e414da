//! Property-based tests using proptest.

use crate::board::{evaluate, Board, Move, UnmakeInfo};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves through `apply`.
fn random_walk(board: &mut Board, seed: u64, num_moves: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        board.apply(moves.as_slice()[idx]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: undoing every applied move restores the board exactly
    #[test]
    fn prop_apply_undo_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial = board.clone();

        random_walk(&mut board, seed, num_moves);
        while board.undo().is_some() {}

        prop_assert_eq!(board, initial);
    }

    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves / 2);
        let before = board.clone();

        let mut rng = StdRng::seed_from_u64(seed.rotate_left(17));
        let mut stack: Vec<(Move, UnmakeInfo)> = Vec::new();
        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv);
            stack.push((mv, info));
        }
        while let Some((mv, info)) = stack.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.to_fen(), before.to_fen());
        prop_assert_eq!(board, before);
    }

    /// Property: incremental hash always equals a full recomputation
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);
        prop_assert_eq!(board.hash(), board.compute_hash());
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(board.hash(), restored.hash());
        prop_assert_eq!(board.side_to_move(), restored.side_to_move());
        prop_assert_eq!(board.castling_rights(), restored.castling_rights());
        prop_assert_eq!(board.en_passant_target(), restored.en_passant_target());
        prop_assert_eq!(board.snapshot(), restored.snapshot());
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..12usize) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let mover = board.side_to_move();
        for mv in board.generate_moves() {
            board.apply(mv);
            prop_assert!(!board.in_check_for(mover), "{} leaves {} in check", mv, mover);
            board.undo();
        }
    }

    /// Property: every legal move's SAN parses back to the same move
    #[test]
    fn prop_san_roundtrip(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        for mv in board.generate_moves() {
            let san = board.move_to_san(&mv);
            let parsed = board.parse_san(&san);
            prop_assert_eq!(parsed, Ok(mv), "SAN {} in {}", san, board.to_fen());
        }
    }

    /// Property: swapping colours negates the evaluation
    #[test]
    fn prop_eval_colour_symmetric(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let mirrored = board.color_mirrored();
        prop_assert_eq!(evaluate(&board), -evaluate(&mirrored));
        prop_assert_eq!(mirrored.color_mirrored().to_fen(), board.to_fen());
    }

    /// Property: evaluation stays within material bounds
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        // Both kings cancel; the rest is at most 39 pawns plus bonuses.
        prop_assert!(evaluate(&board).abs() < 10_000);
    }
}
