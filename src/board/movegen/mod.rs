//! Move generation.
//!
//! Pieces first produce pseudo-legal moves; a move is legal when the mover's
//! king is not attacked after making it. Castling additionally requires the
//! king's start, transit and destination squares to be unattacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveKind, MoveList, Piece, Square};

impl Board {
    /// Build a move from the current placement. `from` must be occupied by
    /// the side to move.
    fn create_move(
        &self,
        from: Square,
        to: Square,
        kind: MoveKind,
        promotion: Option<Piece>,
    ) -> Option<Move> {
        let (color, piece) = self.piece_at(from)?;
        let captured = match kind {
            MoveKind::EnPassant => Some(Piece::Pawn),
            MoveKind::CastleKingside | MoveKind::CastleQueenside => None,
            _ => self.piece_at(to).map(|(_, p)| p),
        };
        Some(Move::new(from, to, piece, color, captured, promotion, kind))
    }

    fn push_move(
        &self,
        out: &mut MoveList,
        from: Square,
        to: Square,
        kind: MoveKind,
        promotion: Option<Piece>,
    ) {
        if let Some(mv) = self.create_move(from, to, kind, promotion) {
            out.push(mv);
        }
    }

    fn push_piece_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, out),
            Piece::Knight => self.generate_knight_moves(from, out),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, piece, out);
            }
            Piece::King => self.generate_king_moves(from, out),
        }
    }

    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        for piece in Piece::ALL {
            for from in self.pieces(color, piece).iter() {
                self.push_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Drop every pseudo-legal move that leaves the mover in check.
    fn retain_legal(&mut self, mut moves: MoveList) -> MoveList {
        let color = self.side_to_move;
        let enemy = color.opponent();
        moves.retain(|m| {
            if m.is_castling() {
                let transit = Square(m.from().rank(), (m.from().file() + m.to().file()) / 2);
                if self.is_square_attacked(m.from(), enemy)
                    || self.is_square_attacked(transit, enemy)
                {
                    return false;
                }
            }
            let info = self.make_move(*m);
            let legal = !self.in_check_for(color);
            self.unmake_move(*m, info);
            legal
        });
        moves
    }

    /// All legal moves for the side to move, in generation order.
    pub fn generate_moves(&mut self) -> MoveList {
        let pseudo = self.generate_pseudo_moves();
        self.retain_legal(pseudo)
    }

    /// Legal moves of the piece on `from`; empty when the square is empty
    /// or holds an opponent piece.
    pub fn moves_from(&mut self, from: Square) -> MoveList {
        let mut pseudo = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            if color == self.side_to_move {
                self.push_piece_moves(from, piece, &mut pseudo);
            }
        }
        self.retain_legal(pseudo)
    }

    /// Legal captures, en passant included.
    pub fn generate_captures(&mut self) -> MoveList {
        let mut pseudo = self.generate_pseudo_moves();
        pseudo.retain(|m| m.is_capture());
        self.retain_legal(pseudo)
    }

    /// Leaf count of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for m in &moves {
            let info = self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m, info);
        }
        nodes
    }
}
