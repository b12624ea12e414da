use crate::zobrist::ZOBRIST;

use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// Rook origin and destination for a castling move landing on `king_to`.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    if king_to.file() == 6 {
        (Square(king_to.rank(), 7), Square(king_to.rank(), 5))
    } else {
        (Square(king_to.rank(), 0), Square(king_to.rank(), 3))
    }
}

/// Square of the pawn removed by an en passant capture.
fn en_passant_victim(m: Move) -> Square {
    Square(m.from().rank(), m.to().file())
}

impl Board {
    /// Castling rights lost when a piece leaves or is captured on `sq`.
    fn revoke_castling_for(&mut self, sq: Square) {
        for color in Color::BOTH {
            let back = color.back_rank();
            if sq == Square(back, 4) {
                self.castling_rights.remove_color(color);
            } else if sq == Square(back, 0) {
                self.castling_rights.remove(color, false);
            } else if sq == Square(back, 7) {
                self.castling_rights.remove(color, true);
            }
        }
    }

    /// Play `m` without touching the move history.
    ///
    /// `m` must have been generated for the current position.
    pub(crate) fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = m.color();
        let info = UnmakeInfo {
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_hash: self.hash,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            made_hash: 0,
            previous_repetition_count: 0,
        };

        let mut hash = self.hash;
        hash ^= ZOBRIST.black_to_move();
        hash ^= ZOBRIST.en_passant(self.en_passant_target);
        hash ^= ZOBRIST.castling(self.castling_rights);

        if let Some(captured) = m.captured() {
            let victim_sq = if m.is_en_passant() {
                en_passant_victim(m)
            } else {
                m.to()
            };
            self.remove_piece(victim_sq, color.opponent(), captured);
            hash ^= ZOBRIST.piece(color.opponent(), captured, victim_sq);
        }

        self.remove_piece(m.from(), color, m.piece());
        hash ^= ZOBRIST.piece(color, m.piece(), m.from());
        let placed = m.promotion().unwrap_or(m.piece());
        self.set_piece(m.to(), color, placed);
        hash ^= ZOBRIST.piece(color, placed, m.to());

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_to);
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from().rank() + m.to().rank()) / 2, m.from().file()))
        } else {
            None
        };
        hash ^= ZOBRIST.en_passant(self.en_passant_target);

        self.revoke_castling_for(m.from());
        self.revoke_castling_for(m.to());
        hash ^= ZOBRIST.castling(self.castling_rights);

        if m.piece() == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
        self.hash = hash;

        let previous_repetition_count = self.repetition_counts.get(hash);
        self.repetition_counts.increment(hash);

        UnmakeInfo {
            made_hash: hash,
            previous_repetition_count,
            ..info
        }
    }

    /// Exact inverse of [`Board::make_move`].
    pub(crate) fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.repetition_counts
            .set(info.made_hash, info.previous_repetition_count);

        let color = m.color();
        self.side_to_move = color;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.hash = info.previous_hash;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            self.remove_piece(rook_to, color, Piece::Rook);
            self.set_piece(rook_from, color, Piece::Rook);
        }

        self.remove_piece(m.to(), color, m.promotion().unwrap_or(m.piece()));
        self.set_piece(m.from(), color, m.piece());

        if let Some(captured) = m.captured() {
            let victim_sq = if m.is_en_passant() {
                en_passant_victim(m)
            } else {
                m.to()
            };
            self.set_piece(victim_sq, color.opponent(), captured);
        }
    }
}
