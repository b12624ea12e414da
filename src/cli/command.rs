use crate::board::Color;

use super::error::CommandError;
use super::options::parse_depth;

/// Where a `position` command starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSetup {
    StartPos,
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoachCommand {
    /// Reset the game; the colour is the human's side when given
    New(Option<Color>),
    Position {
        setup: PositionSetup,
        moves: Vec<String>,
    },
    /// A human move in SAN or UCI notation
    Move(String),
    Go {
        depth: Option<u32>,
    },
    Analyze,
    Undo,
    Set {
        name: String,
        value: String,
    },
    Board,
    Fen,
    Status,
    History,
    Perft(usize),
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<CoachCommand>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0] {
        "new" => CoachCommand::New(match parts.get(1) {
            None => None,
            Some(&"white") | Some(&"w") => Some(Color::White),
            Some(&"black") | Some(&"b") => Some(Color::Black),
            Some(other) => {
                return Err(CommandError::InvalidArgument {
                    name: "colour",
                    value: (*other).to_string(),
                })
            }
        }),
        "position" => parse_position(&parts[1..])?,
        "move" | "m" => {
            let mv = parts.get(1).ok_or(CommandError::MissingArgument("move"))?;
            CoachCommand::Move((*mv).to_string())
        }
        "go" => {
            let depth = match parts.get(1..) {
                Some(["depth", value, ..]) => Some(parse_depth(value)?),
                Some(["depth"]) => return Err(CommandError::MissingArgument("depth")),
                _ => None,
            };
            CoachCommand::Go { depth }
        }
        "analyze" | "analyse" => CoachCommand::Analyze,
        "undo" => CoachCommand::Undo,
        "set" => {
            let name = parts.get(1).ok_or(CommandError::MissingArgument("option name"))?;
            let value = parts.get(2).ok_or(CommandError::MissingArgument("option value"))?;
            CoachCommand::Set {
                name: (*name).to_string(),
                value: (*value).to_string(),
            }
        }
        "board" | "d" => CoachCommand::Board,
        "fen" => CoachCommand::Fen,
        "status" => CoachCommand::Status,
        "history" => CoachCommand::History,
        "perft" => {
            let depth = parts.get(1).map_or(Ok(1), |v| {
                v.parse::<usize>().map_err(|_| CommandError::InvalidArgument {
                    name: "perft depth",
                    value: (*v).to_string(),
                })
            })?;
            CoachCommand::Perft(depth)
        }
        "help" | "?" => CoachCommand::Help,
        "quit" | "exit" => CoachCommand::Quit,
        // A bare move is accepted without the `move` keyword.
        other if looks_like_move(other) && parts.len() == 1 => {
            CoachCommand::Move(other.to_string())
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(cmd))
}

fn parse_position(args: &[&str]) -> Result<CoachCommand, CommandError> {
    let (setup, rest) = match args.first() {
        Some(&"startpos") => (PositionSetup::StartPos, &args[1..]),
        Some(&"fen") => {
            let fields = &args[1..];
            let end = fields
                .iter()
                .position(|p| *p == "moves")
                .unwrap_or(fields.len());
            if end == 0 {
                return Err(CommandError::MissingArgument("FEN"));
            }
            (PositionSetup::Fen(fields[..end].join(" ")), &fields[end..])
        }
        Some(other) => {
            return Err(CommandError::InvalidArgument {
                name: "position",
                value: (*other).to_string(),
            })
        }
        None => return Err(CommandError::MissingArgument("startpos or fen")),
    };

    let moves = match rest {
        [] => Vec::new(),
        ["moves", moves @ ..] => moves.iter().map(|m| (*m).to_string()).collect(),
        [other, ..] => {
            return Err(CommandError::InvalidArgument {
                name: "position",
                value: (*other).to_string(),
            })
        }
    };

    Ok(CoachCommand::Position { setup, moves })
}

fn looks_like_move(word: &str) -> bool {
    if word.starts_with("O-O") || word.starts_with("0-0") {
        return true;
    }
    let bytes = word.as_bytes();
    match bytes {
        [b'a'..=b'h', b'1'..=b'8' | b'x', ..] => true,
        [b'K' | b'Q' | b'R' | b'B' | b'N', b'a'..=b'h' | b'1'..=b'8' | b'x', ..] => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CoachCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   ").unwrap().is_none());
        assert!(parse_command("# opening drill").unwrap().is_none());
    }

    #[test]
    fn new_takes_an_optional_colour() {
        assert_eq!(parse("new"), CoachCommand::New(None));
        assert_eq!(parse("new black"), CoachCommand::New(Some(Color::Black)));
        assert!(matches!(
            parse_command("new purple"),
            Err(CommandError::InvalidArgument { name: "colour", .. })
        ));
    }

    #[test]
    fn position_startpos_with_moves() {
        assert_eq!(
            parse("position startpos moves e2e4 e7e5"),
            CoachCommand::Position {
                setup: PositionSetup::StartPos,
                moves: vec!["e2e4".to_string(), "e7e5".to_string()],
            }
        );
    }

    #[test]
    fn position_fen_collects_fields_up_to_moves() {
        let cmd = parse("position fen 4k3/8/8/8/8/8/8/4K2R w K - 0 1 moves e1g1");
        assert_eq!(
            cmd,
            CoachCommand::Position {
                setup: PositionSetup::Fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1".to_string()),
                moves: vec!["e1g1".to_string()],
            }
        );
        assert!(matches!(
            parse_command("position fen"),
            Err(CommandError::MissingArgument("FEN"))
        ));
    }

    #[test]
    fn go_depth_is_validated() {
        assert_eq!(parse("go"), CoachCommand::Go { depth: None });
        assert_eq!(parse("go depth 4"), CoachCommand::Go { depth: Some(4) });
        assert!(parse_command("go depth 0").is_err());
        assert!(parse_command("go depth").is_err());
    }

    #[test]
    fn moves_with_and_without_keyword() {
        assert_eq!(parse("move Nf3"), CoachCommand::Move("Nf3".to_string()));
        assert_eq!(parse("e4"), CoachCommand::Move("e4".to_string()));
        assert_eq!(parse("O-O"), CoachCommand::Move("O-O".to_string()));
        assert!(matches!(
            parse_command("move"),
            Err(CommandError::MissingArgument("move"))
        ));
    }

    #[test]
    fn set_and_perft() {
        assert_eq!(
            parse("set depth 5"),
            CoachCommand::Set {
                name: "depth".to_string(),
                value: "5".to_string()
            }
        );
        assert_eq!(parse("perft 3"), CoachCommand::Perft(3));
        assert_eq!(parse("perft"), CoachCommand::Perft(1));
        assert!(parse_command("perft x").is_err());
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(matches!(
            parse_command("xyzzy"),
            Err(CommandError::Unknown(cmd)) if cmd == "xyzzy"
        ));
        assert!(matches!(
            parse_command("bogus"),
            Err(CommandError::Unknown(_))
        ));
        assert_eq!(parse("quit"), CoachCommand::Quit);
    }
}
