pub mod analysis;
pub mod board;
pub mod cli;
mod zobrist;

pub use analysis::{grade, Grade, GradeReport, MAX_REWIND};
pub use board::{recommend, Board, Color, Move, MoveRecord, Piece, Square};
