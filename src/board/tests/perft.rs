//! Perft (performance test) for move generation correctness.

use crate::board::{Board, Square};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
    /// Too slow for an unoptimized build
    deep: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
        deep: &[(4, 197_281), (5, 4_865_609)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
        deep: &[(3, 97_862), (4, 4_085_603)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
        deep: &[(4, 43_238), (5, 674_624)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467)],
        deep: &[(4, 422_333)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486)],
        deep: &[(3, 62_379), (4, 2_103_487)],
    },
    TestPosition {
        name: "Position 6 (Win at Chess)",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079)],
        deep: &[(3, 89_890)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
        deep: &[],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
        deep: &[],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
        deep: &[],
    },
];

fn check(position: &TestPosition, depths: &[(usize, u64)]) {
    let mut board = Board::from_fen(position.fen);
    let before = board.clone();

    for &(depth, expected) in depths {
        let start = Instant::now();
        let nodes = board.perft(depth);
        println!("  {} depth {}: {} nodes in {:?}", position.name, depth, nodes, start.elapsed());

        assert_eq!(
            nodes, expected,
            "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
            position.name, depth, expected, nodes
        );
    }
    assert_eq!(board, before, "perft left '{}' modified", position.name);
}

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        check(position, position.depths);
    }
}

#[test]
#[ignore = "slow without optimizations; run with --release -- --ignored"]
fn test_deep_perft_positions() {
    for position in TEST_POSITIONS {
        check(position, position.deep);
    }
}

#[test]
fn test_perft_zero_is_one() {
    assert_eq!(Board::new().perft(0), 1);
}

#[test]
fn test_moves_from_partitions_generate_moves() {
    let mut board = Board::from_fen(TEST_POSITIONS[1].fen);
    let total = board.generate_moves().len();
    let mut sum = 0;
    for index in 0..64 {
        sum += board.moves_from(Square::from_index(index)).len();
    }
    assert_eq!(sum, total);
    // Opponent pieces and empty squares have no moves for the side to move.
    assert!(board.moves_from(Square(7, 0)).is_empty());
    assert!(board.moves_from(Square(3, 0)).is_empty());
}

#[test]
fn test_generate_captures_matches_filter() {
    let mut board = Board::from_fen(TEST_POSITIONS[1].fen);
    let expected = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_capture())
        .count();
    let captures = board.generate_captures();
    assert_eq!(captures.len(), expected);
    assert!(captures.iter().all(|m| m.is_capture()));
    assert_eq!(expected, 8);
}
