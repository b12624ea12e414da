use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::{Board, Color, MoveKind, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, out: &mut MoveList) {
        let color = self.side_to_move;
        let own = self.occupied[color.index()];
        for to in (KING_ATTACKS[from.as_index()] & !own).iter() {
            self.push_move(out, from, to, MoveKind::Normal, None);
        }

        let back = color.back_rank();
        if from != Square(back, 4) {
            return;
        }
        let rook_home = |file| self.piece_at(Square(back, file)) == Some((color, Piece::Rook));
        if self.castling_rights.has(color, true)
            && self.is_empty(Square(back, 5))
            && self.is_empty(Square(back, 6))
            && rook_home(7)
        {
            self.push_move(out, from, Square(back, 6), MoveKind::CastleKingside, None);
        }
        if self.castling_rights.has(color, false)
            && self.is_empty(Square(back, 1))
            && self.is_empty(Square(back, 2))
            && self.is_empty(Square(back, 3))
            && rook_home(0)
        {
            self.push_move(out, from, Square(back, 2), MoveKind::CastleQueenside, None);
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Whether any piece of `attacker` attacks `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let idx = square.as_index();
        let pieces = |piece| self.pieces(attacker, piece);

        // A pawn of `attacker` hits `square` from where a defending pawn on
        // `square` would itself attack.
        let pawn_sources = PAWN_ATTACKS[attacker.opponent().index()][idx];
        if !(pieces(Piece::Pawn) & pawn_sources).is_empty()
            || !(pieces(Piece::Knight) & KNIGHT_ATTACKS[idx]).is_empty()
            || !(pieces(Piece::King) & KING_ATTACKS[idx]).is_empty()
        {
            return true;
        }

        let queens = pieces(Piece::Queen);
        let straight = pieces(Piece::Rook) | queens;
        let diagonal = pieces(Piece::Bishop) | queens;
        !(rook_attacks(square, self.all_occupied) & straight).is_empty()
            || !(bishop_attacks(square, self.all_occupied) & diagonal).is_empty()
    }

    pub(crate) fn in_check_for(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check_for(self.side_to_move)
    }
}
