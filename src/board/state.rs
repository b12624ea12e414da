use std::collections::HashMap;

use crate::zobrist::ZOBRIST;

use super::history::HistoryEntry;
use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Everything `make_move` overwrites that the move itself does not record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_hash: u64,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) made_hash: u64,
    pub(crate) previous_repetition_count: u32,
}

/// Occurrence count per position hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    /// A count of zero removes the entry so equal positions compare equal.
    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }
}

/// A chess position together with the moves that led to it.
///
/// The search mutates one `Board` in place through `apply`/`undo` (or the
/// lower-level `make_move`/`unmake_move`). Any balanced sequence leaves the
/// board equal to where it started, hash and repetition counts included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) hash: u64,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) history: Vec<HistoryEntry>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board.finish_setup();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            hash: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_counts: RepetitionTable::default(),
            history: Vec::new(),
        }
    }

    /// Hash the placed position and count it as seen once.
    pub(crate) fn finish_setup(&mut self) {
        self.hash = self.compute_hash();
        self.repetition_counts = RepetitionTable::default();
        self.repetition_counts.set(self.hash, 1);
        self.history.clear();
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Bitboard of one colour's pieces of one kind.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let keep = !Bitboard::from_square(sq);
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()] = self.pieces[c_idx][piece.index()] & keep;
        self.occupied[c_idx] = self.occupied[c_idx] & keep;
        self.all_occupied = self.all_occupied & keep;
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces(color, *piece).contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    hash ^= ZOBRIST.piece(color, piece, sq);
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        hash ^= ZOBRIST.en_passant(self.en_passant_target);
        hash
    }

    /// 8x8 view of the placement; row 0 is rank 8, column 0 is the a-file.
    #[must_use]
    pub fn snapshot(&self) -> [[Option<(Color, Piece)>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (file, cell) in cells.iter_mut().enumerate() {
                *cell = self.piece_at(Square(7 - row, file));
            }
        }
        grid
    }

    /// The same position with colours exchanged and ranks mirrored.
    ///
    /// Side to move, castling rights and the en passant target follow the
    /// swap; move history is not carried over.
    #[must_use]
    pub fn color_mirrored(&self) -> Board {
        let mut mirrored = Board::empty();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    mirrored.set_piece(sq.flip_vertical(), color.opponent(), piece);
                }
            }
        }
        mirrored.side_to_move = self.side_to_move.opponent();
        mirrored.castling_rights = self.castling_rights.swapped();
        mirrored.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        mirrored.halfmove_clock = self.halfmove_clock;
        mirrored.fullmove_number = self.fullmove_number;
        mirrored.finish_setup();
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
