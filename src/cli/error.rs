use std::fmt;
use std::io;

use crate::board::{Color, FenError, MoveParseError, SanError};

/// Anything that stops a front-end command from taking effect.
#[derive(Debug)]
pub enum CommandError {
    /// First word is not a known command
    Unknown(String),
    /// A required argument was not given
    MissingArgument(&'static str),
    /// An argument was given but could not be understood
    InvalidArgument { name: &'static str, value: String },
    InvalidFen(FenError),
    /// Neither SAN nor UCI notation matched a legal move
    InvalidMove { input: String, san: SanError, uci: MoveParseError },
    /// A move in a `position ... moves` list was illegal
    InvalidMoveList { input: String, error: MoveParseError },
    /// The command needs a move to act on and there is none
    NothingToAnalyze,
    NothingToUndo,
    GameOver,
    /// A human move was entered while the engine's side is to move
    NotYourTurn { to_move: Color },
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command: {cmd}"),
            CommandError::MissingArgument(name) => write!(f, "Missing argument: {name}"),
            CommandError::InvalidArgument { name, value } => {
                write!(f, "Invalid {name}: '{value}'")
            }
            CommandError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CommandError::InvalidMove { input, san, uci } => {
                write!(f, "Invalid move '{input}': {san}; as UCI: {uci}")
            }
            CommandError::InvalidMoveList { input, error } => {
                write!(f, "Invalid move '{input}': {error}")
            }
            CommandError::NothingToAnalyze => write!(f, "No human move to analyze"),
            CommandError::NothingToUndo => write!(f, "No moves to undo"),
            CommandError::GameOver => write!(f, "The game is over"),
            CommandError::NotYourTurn { to_move } => {
                write!(f, "Not your turn: {to_move} is played by the engine")
            }
            CommandError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidFen(e) => Some(e),
            CommandError::InvalidMove { san, .. } => Some(san),
            CommandError::InvalidMoveList { error, .. } => Some(error),
            CommandError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for CommandError {
    fn from(e: FenError) -> Self {
        CommandError::InvalidFen(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = CommandError::InvalidArgument {
            name: "depth",
            value: "deep".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid depth: 'deep'");
        assert_eq!(
            CommandError::Unknown("castle".to_string()).to_string(),
            "Unknown command: castle"
        );
        assert_eq!(
            CommandError::NotYourTurn { to_move: Color::Black }.to_string(),
            "Not your turn: Black is played by the engine"
        );
    }

    #[test]
    fn fen_errors_convert() {
        let err: CommandError = FenError::TooFewParts { found: 2 }.into();
        assert!(matches!(
            err,
            CommandError::InvalidFen(FenError::TooFewParts { found: 2 })
        ));
    }
}
