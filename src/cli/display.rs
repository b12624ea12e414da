//! Text renderings of the board and the move list.

use crate::board::{Board, Color};

const BORDER: &str = "  +-----------------+";

/// ASCII diagram with White at the bottom, upper case for White pieces.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(BORDER);
    out.push('\n');
    for (row, rank) in board.snapshot().iter().enumerate() {
        out.push_str(&format!("{} |", 8 - row));
        for cell in rank {
            let c = cell.map_or('.', |(color, piece)| piece.to_fen_char(color));
            out.push(' ');
            out.push(c);
        }
        out.push_str(" |\n");
    }
    out.push_str(BORDER);
    out.push('\n');
    out.push_str("    a b c d e f g h");
    out
}

/// Played moves as numbered SAN pairs, e.g. `1. e4 e5 2. Nf3`.
///
/// A game set up with Black to move starts with `1...`.
#[must_use]
pub fn format_history(board: &Board) -> String {
    let mut replay = board.clone();
    let mut moves = Vec::with_capacity(board.ply_count());
    while let Some(mv) = replay.undo() {
        moves.push(mv);
    }

    let mut tokens = Vec::with_capacity(moves.len() + moves.len() / 2 + 1);
    for (i, mv) in moves.into_iter().rev().enumerate() {
        let number = replay.fullmove_number();
        let san = replay.play(mv).san;
        match mv.color() {
            Color::White => tokens.push(format!("{number}. {san}")),
            Color::Black if i == 0 => tokens.push(format!("{number}... {san}")),
            Color::Black => tokens.push(san),
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[&str]) {
        for san in moves {
            let mv = board.parse_san(san).unwrap();
            board.apply(mv);
        }
    }

    #[test]
    fn start_position_diagram() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[4], "5 | . . . . . . . . |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
        assert_eq!(lines[10], "    a b c d e f g h");
    }

    #[test]
    fn history_is_numbered_in_pairs() {
        let mut board = Board::new();
        assert_eq!(format_history(&board), "");
        play(&mut board, &["e4", "e5", "Nf3"]);
        assert_eq!(format_history(&board), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn history_from_black_to_move() {
        let mut board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        play(&mut board, &["c5", "Nf3", "d6"]);
        assert_eq!(format_history(&board), "1... c5 2. Nf3 d6");
    }
}
