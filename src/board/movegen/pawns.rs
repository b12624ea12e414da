use super::super::{Board, MoveKind, MoveList, Square, PROMOTION_PIECES};

impl Board {
    fn push_pawn_move(&self, out: &mut MoveList, from: Square, to: Square, kind: MoveKind) {
        if to.rank() == self.side_to_move.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                self.push_move(out, from, to, kind, Some(promo));
            }
        } else {
            self.push_move(out, from, to, kind, None);
        }
    }

    pub(crate) fn generate_pawn_moves(&self, from: Square, out: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let Some(one) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(one) {
            self.push_pawn_move(out, from, one, MoveKind::Normal);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(dir, 0).filter(|sq| self.is_empty(*sq)) {
                    self.push_move(out, from, two, MoveKind::DoublePawnPush, None);
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    self.push_pawn_move(out, from, target, MoveKind::Normal);
                }
                None if self.en_passant_target == Some(target) => {
                    self.push_move(out, from, target, MoveKind::EnPassant, None);
                }
                _ => {}
            }
        }
    }
}
