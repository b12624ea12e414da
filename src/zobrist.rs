//! Zobrist keys for position hashing.
//!
//! The position hash only backs threefold-repetition detection, so it has
//! to be stable for a given position and cheap to update incrementally in
//! make/unmake.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

const SEED: u64 = 1_234_567_890;

pub(crate) struct ZobristKeys {
    /// `[piece][color][square]`
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move: u64,
    /// `[color][kingside]`, kingside = 0
    castling_keys: [[u64; 2]; 2],
    /// Only the file of the en passant target matters.
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for key in piece_keys.iter_mut().flatten().flatten() {
            *key = rng.gen();
        }
        let black_to_move = rng.gen();
        let mut castling_keys = [[0; 2]; 2];
        for key in castling_keys.iter_mut().flatten() {
            *key = rng.gen();
        }
        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }
        ZobristKeys {
            piece_keys,
            black_to_move,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn black_to_move(&self) -> u64 {
        self.black_to_move
    }

    /// Combined key of every right present in `rights`.
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            for (side, kingside) in [true, false].into_iter().enumerate() {
                if rights.has(color, kingside) {
                    key ^= self.castling_keys[color.index()][side];
                }
            }
        }
        key
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_keys[sq.file()])
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_reproducible_and_distinct() {
        let again = ZobristKeys::new();
        let white_pawn_e2 = ZOBRIST.piece(Color::White, Piece::Pawn, Square(1, 4));
        assert_eq!(white_pawn_e2, again.piece(Color::White, Piece::Pawn, Square(1, 4)));
        assert_ne!(white_pawn_e2, ZOBRIST.piece(Color::Black, Piece::Pawn, Square(1, 4)));
        assert_eq!(ZOBRIST.castling(CastlingRights::none()), 0);
        assert_eq!(ZOBRIST.en_passant(None), 0);
    }
}
