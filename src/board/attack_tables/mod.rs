//! Attack generation.
//!
//! Leapers use lookup tables. Sliders use Hyperbola Quintessence
//! (`o ^ (o - 2r)` along a line mask, with a byte swap for the reverse
//! direction) on files and diagonals, and a small lookup table on ranks
//! where the byte swap trick does not apply.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

use crate::board::types::{Bitboard, Square};

/// Line masks through a square, excluding nothing: `[file, diagonal, anti-diagonal]`.
struct LineMasks {
    file: [u64; 64],
    diagonal: [u64; 64],
    anti_diagonal: [u64; 64],
}

fn line_through(idx: usize, dr: isize, df: isize) -> u64 {
    let origin = Square::from_index(idx);
    let mut mask = 1u64 << idx;
    for sign in [1, -1] {
        let mut current = origin;
        while let Some(next) = current.offset(dr * sign, df * sign) {
            mask |= 1u64 << next.as_index();
            current = next;
        }
    }
    mask
}

static LINE_MASKS: Lazy<LineMasks> = Lazy::new(|| {
    let mut masks = LineMasks {
        file: [0; 64],
        diagonal: [0; 64],
        anti_diagonal: [0; 64],
    };
    for idx in 0..64 {
        masks.file[idx] = line_through(idx, 1, 0);
        masks.diagonal[idx] = line_through(idx, 1, 1);
        masks.anti_diagonal[idx] = line_through(idx, 1, -1);
    }
    masks
});

/// First-rank attacks indexed by `[inner occupancy (files b-g)][file]`.
static RANK_ATTACKS: Lazy<[[u8; 8]; 64]> = Lazy::new(|| {
    let mut table = [[0u8; 8]; 64];
    for (inner, row) in table.iter_mut().enumerate() {
        let occupied = (inner as u8) << 1;
        for (file, slot) in row.iter_mut().enumerate() {
            let mut attacks = 0u8;
            for to in (file + 1)..8 {
                attacks |= 1 << to;
                if occupied & (1 << to) != 0 {
                    break;
                }
            }
            for to in (0..file).rev() {
                attacks |= 1 << to;
                if occupied & (1 << to) != 0 {
                    break;
                }
            }
            *slot = attacks;
        }
    }
    table
});

#[inline]
fn line_attacks(occupied: u64, mask: u64, idx: usize) -> u64 {
    let piece = 1u64 << idx;
    let forward = occupied & mask;
    let reverse = forward.swap_bytes();
    let up = forward.wrapping_sub(piece.wrapping_mul(2));
    let down = reverse
        .wrapping_sub(piece.swap_bytes().wrapping_mul(2))
        .swap_bytes();
    (up ^ down) & mask & !piece
}

#[inline]
fn rank_attacks(occupied: u64, idx: usize) -> u64 {
    let shift = (idx / 8) * 8;
    let inner = ((occupied >> shift) >> 1) & 0x3F;
    u64::from(RANK_ATTACKS[inner as usize][idx % 8]) << shift
}

/// Diagonal attacks from `sq` given the full occupancy.
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let idx = sq.as_index();
    let masks = &*LINE_MASKS;
    Bitboard(
        line_attacks(occupied.0, masks.diagonal[idx], idx)
            | line_attacks(occupied.0, masks.anti_diagonal[idx], idx),
    )
}

/// Rank and file attacks from `sq` given the full occupancy.
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let idx = sq.as_index();
    Bitboard(line_attacks(occupied.0, LINE_MASKS.file[idx], idx) | rank_attacks(occupied.0, idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(names: &[&str]) -> Bitboard {
        names.iter().fold(Bitboard::EMPTY, |bb, name| {
            bb | Bitboard::from_square(name.parse().unwrap())
        })
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let attacks = rook_attacks(Square(3, 4), Bitboard::EMPTY);
        assert_eq!(attacks.popcount(), 14);
        assert!(!attacks.contains(Square(3, 4)));
    }

    #[test]
    fn bishop_on_empty_board_reaches_both_long_diagonals() {
        let attacks = bishop_attacks(Square(3, 4), Bitboard::EMPTY);
        for name in ["b1", "h7", "h1", "a8"] {
            assert!(attacks.contains(name.parse().unwrap()), "{name}");
        }
        assert_eq!(attacks.popcount(), 13);
    }

    #[test]
    fn rook_stops_at_first_blocker() {
        let attacks = rook_attacks(Square(3, 4), squares(&["e6", "c4"]));
        assert!(attacks.contains("e6".parse().unwrap()));
        assert!(!attacks.contains("e7".parse().unwrap()));
        assert!(attacks.contains("c4".parse().unwrap()));
        assert!(!attacks.contains("b4".parse().unwrap()));
        assert!(attacks.contains("h4".parse().unwrap()));
    }

    #[test]
    fn bishop_stops_at_first_blocker() {
        let attacks = bishop_attacks(Square(3, 4), squares(&["g6"]));
        assert!(attacks.contains("g6".parse().unwrap()));
        assert!(!attacks.contains("h7".parse().unwrap()));
    }

    #[test]
    fn sliders_match_ray_walk_on_busy_boards() {
        let boards = [0u64, 0xFF00_FF00_FF00_FF00, 0x0042_2400_0018_8100];
        for &occ in &boards {
            for idx in 0..64 {
                let sq = Square::from_index(idx);
                let occ = Bitboard(occ);
                assert_eq!(rook_attacks(sq, occ), walk(sq, occ, &[(1, 0), (-1, 0), (0, 1), (0, -1)]));
                assert_eq!(bishop_attacks(sq, occ), walk(sq, occ, &[(1, 1), (1, -1), (-1, 1), (-1, -1)]));
            }
        }
    }

    fn walk(from: Square, occ: Bitboard, dirs: &[(isize, isize)]) -> Bitboard {
        let mut out = Bitboard::EMPTY;
        for &(dr, df) in dirs {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                out |= Bitboard::from_square(next);
                if occ.contains(next) {
                    break;
                }
                current = next;
            }
        }
        out
    }
}
