use std::io::Write;
use std::process::{Command, Stdio};

use chess_coach::cli::{parse_command, CoachCommand, CommandError, Flow, PositionSetup, Session};
use chess_coach::Color;

fn run_binary(script: &str) -> (String, String) {
    let exe = env!("CARGO_BIN_EXE_chess_coach");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn coach binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("coach did not exit");
    assert!(output.status.success());
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn scripted_game_over_stdin() {
    let (stdout, stderr) = run_binary(
        "set depth 1\nset analysis 1\nmove a3\nanalyze\nhistory\nfen\nbogus\nquit\n",
    );

    assert!(stdout.contains("You played a3"), "{stdout}");
    assert!(stdout.contains("Engine plays "), "{stdout}");
    assert!(stdout.contains("a3: Alternative (engine: Nc3)"), "{stdout}");
    assert!(stdout.contains("1. a3 "), "{stdout}");
    assert!(stdout.contains("White to move"), "{stdout}");
    assert!(stderr.contains("Unknown command: bogus"), "{stderr}");
}

#[test]
fn binary_exits_on_end_of_input() {
    let (stdout, _) = run_binary("perft 2\n");
    assert!(stdout.contains("perft depth 2 nodes 400"), "{stdout}");
}

#[test]
fn checkmate_is_announced() {
    let mut session = Session::new(Vec::new());
    session
        .handle_line("position startpos moves e2e4 e7e5 f1c4 b8c6 d1h5 g8f6")
        .unwrap();
    session.handle_line("move Qxf7#").unwrap();
    let mut finished = session.board().clone();
    assert!(finished.is_checkmate());
    assert_eq!(session.board().ply_count(), 7);

    assert!(matches!(
        session.handle_line("move Ke7"),
        Err(CommandError::GameOver)
    ));
    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("You played Qxf7#"), "{text}");
    assert!(text.contains("Game over, White wins by checkmate!"), "{text}");
    assert!(!text.contains("Engine plays"), "{text}");
}

#[test]
fn go_reports_without_moving() {
    let mut session = Session::new(Vec::new());
    assert_eq!(session.handle_line("go depth 1").unwrap(), Flow::Continue);
    assert_eq!(session.board().ply_count(), 0);
    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("Best move Nc3 (b1c3) score 50 depth 1"), "{text}");
}

#[test]
fn uci_and_san_input_both_work() {
    let mut session = Session::new(Vec::new());
    session.handle_line("set depth 1").unwrap();
    session.handle_line("g1f3").unwrap();
    session.handle_line("d4").unwrap();
    assert_eq!(session.board().ply_count(), 4);
    assert_eq!(session.board().side_to_move(), Color::White);
}

#[test]
fn invalid_position_is_rejected() {
    let mut session = Session::new(Vec::new());
    assert!(matches!(
        session.handle_line("position fen 8/8/8 w - - 0 1"),
        Err(CommandError::InvalidFen(_))
    ));
    assert!(matches!(
        session.handle_line("position startpos moves e2e5"),
        Err(CommandError::InvalidMoveList { .. })
    ));
    assert_eq!(session.board().ply_count(), 0);
}

#[test]
fn command_parsing() {
    assert_eq!(
        parse_command("position startpos moves e2e4").unwrap(),
        Some(CoachCommand::Position {
            setup: PositionSetup::StartPos,
            moves: vec!["e2e4".to_string()],
        })
    );
    assert_eq!(
        parse_command("new black").unwrap(),
        Some(CoachCommand::New(Some(Color::Black)))
    );
    assert!(parse_command("set depth zero").is_ok());
    assert!(parse_command("go depth zero").is_err());
}
