//! Line-based coaching front end.
//!
//! Reads one command per line, plays the engine's replies and grades the
//! human's moves on request. Output goes to any [`Write`] sink so sessions
//! can be scripted.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info, warn};

use crate::analysis::grade;
use crate::board::{recommend_scored, Board, Move, MoveRecord};

pub mod command;
pub mod display;
pub mod error;
pub mod options;

pub use command::{parse_command, CoachCommand, PositionSetup};
pub use display::{format_history, render_board};
pub use error::CommandError;
pub use options::CoachOptions;

const HELP: &str = "\
commands:
  new [white|black]                    start a game as the given colour
  position startpos|fen <fen> [moves ...]
  move <san|uci>                       play a move, the engine replies
  go [depth N]                         show the engine's choice
  analyze                              grade your last move
  undo                                 take back the last move pair
  set depth N | set analysis N
  board | fen | status | history | perft N
  quit";

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game between the human and the engine.
pub struct Session<W: Write> {
    board: Board,
    options: CoachOptions,
    /// The human's latest move, cleared whenever it leaves the board
    last_human: Option<MoveRecord>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Session {
            board: Board::new(),
            options: CoachOptions::default(),
            last_human: None,
            out,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &CoachOptions {
        &self.options
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow, CommandError> {
        match parse_command(line)? {
            Some(cmd) => self.execute(cmd),
            None => Ok(Flow::Continue),
        }
    }

    pub fn execute(&mut self, cmd: CoachCommand) -> Result<Flow, CommandError> {
        debug!("command: {cmd:?}");
        match cmd {
            CoachCommand::New(color) => {
                if let Some(color) = color {
                    self.options.human = color;
                }
                self.board = Board::new();
                self.last_human = None;
                writeln!(self.out, "New game, you play {}", self.options.human)?;
                self.engine_reply()?;
                self.print_status()?;
            }
            CoachCommand::Position { setup, moves } => {
                self.set_position(&setup, &moves)?;
                self.engine_reply()?;
                self.print_status()?;
            }
            CoachCommand::Move(text) => {
                self.human_move(&text)?;
                self.engine_reply()?;
                self.print_status()?;
            }
            CoachCommand::Go { depth } => self.go(depth.unwrap_or(self.options.depth))?,
            CoachCommand::Analyze => self.analyze()?,
            CoachCommand::Undo => {
                self.undo()?;
                self.print_status()?;
            }
            CoachCommand::Set { name, value } => {
                self.options.apply_set(&name, &value)?;
                writeln!(
                    self.out,
                    "depth {} analysis {}",
                    self.options.depth, self.options.analysis_depth
                )?;
            }
            CoachCommand::Board => writeln!(self.out, "{}", render_board(&self.board))?,
            CoachCommand::Fen => writeln!(self.out, "{}", self.board.to_fen())?,
            CoachCommand::Status => self.print_status()?,
            CoachCommand::History => writeln!(self.out, "{}", format_history(&self.board))?,
            CoachCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.board.perft(depth);
                writeln!(
                    self.out,
                    "perft depth {depth} nodes {nodes} time_ms {}",
                    start.elapsed().as_millis()
                )?;
            }
            CoachCommand::Help => writeln!(self.out, "{HELP}")?,
            CoachCommand::Quit => return Ok(Flow::Quit),
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    fn set_position(&mut self, setup: &PositionSetup, moves: &[String]) -> Result<(), CommandError> {
        let mut board = match setup {
            PositionSetup::StartPos => Board::new(),
            PositionSetup::Fen(fen) => Board::try_from_fen(fen)?,
        };
        for text in moves {
            let mv = board
                .parse_move(text)
                .map_err(|error| CommandError::InvalidMoveList {
                    input: text.clone(),
                    error,
                })?;
            board.apply(mv);
        }
        self.board = board;
        self.last_human = None;
        Ok(())
    }

    /// SAN first, then UCI long algebraic.
    fn resolve_move(&mut self, text: &str) -> Result<Move, CommandError> {
        let san = match self.board.parse_san(text) {
            Ok(mv) => return Ok(mv),
            Err(e) => e,
        };
        self.board
            .parse_move(text)
            .map_err(|uci| CommandError::InvalidMove {
                input: text.to_string(),
                san,
                uci,
            })
    }

    fn human_move(&mut self, text: &str) -> Result<(), CommandError> {
        if self.board.is_game_over() {
            return Err(CommandError::GameOver);
        }
        let to_move = self.board.side_to_move();
        if to_move != self.options.human {
            return Err(CommandError::NotYourTurn { to_move });
        }
        let mv = self.resolve_move(text)?;
        let record = self.board.play(mv);
        info!("human played {} ({mv})", record.san);
        writeln!(self.out, "You played {}", record.san)?;
        self.last_human = Some(record);
        Ok(())
    }

    /// Plays the engine's move when it is the engine's turn and the game
    /// is still on.
    fn engine_reply(&mut self) -> Result<(), CommandError> {
        if self.board.side_to_move() != self.options.engine() {
            return Ok(());
        }
        let Some(rec) = recommend_scored(&mut self.board, self.options.depth) else {
            return Ok(());
        };
        let record = self.board.play(rec.best_move);
        info!(
            "engine played {} score {} nodes {}",
            record.san,
            rec.score,
            rec.stats.nodes + rec.stats.qnodes
        );
        writeln!(self.out, "Engine plays {}", record.san)?;
        Ok(())
    }

    fn go(&mut self, depth: u32) -> Result<(), CommandError> {
        match recommend_scored(&mut self.board, depth) {
            Some(rec) => {
                let san = self.board.move_to_san(&rec.best_move);
                writeln!(
                    self.out,
                    "Best move {san} ({}) score {} depth {depth} nodes {}",
                    rec.best_move,
                    rec.score,
                    rec.stats.nodes + rec.stats.qnodes
                )?;
            }
            None => writeln!(self.out, "No move: {}", self.board.status())?,
        }
        Ok(())
    }

    fn analyze(&mut self) -> Result<(), CommandError> {
        let record = self
            .last_human
            .clone()
            .ok_or(CommandError::NothingToAnalyze)?;
        let report = grade(&mut self.board, &record, self.options.analysis_depth);
        writeln!(self.out, "{}: {report}", record.san)?;
        Ok(())
    }

    /// Takes back the engine's reply together with the human move before it.
    fn undo(&mut self) -> Result<(), CommandError> {
        let last = self.board.undo().ok_or(CommandError::NothingToUndo)?;
        self.last_human = None;
        let mut taken = 1;
        if last.color() == self.options.engine() && self.board.undo().is_some() {
            taken += 1;
        }
        writeln!(self.out, "Took back {taken} ply")?;
        Ok(())
    }

    fn print_status(&mut self) -> Result<(), CommandError> {
        let status = self.board.status();
        writeln!(self.out, "{status}")?;
        Ok(())
    }
}

/// Run the interactive loop over stdin and stdout until `quit` or EOF.
pub fn run_loop() {
    let stdin = io::stdin();
    let mut session = Session::new(io::stdout());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };
        match session.handle_line(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!("command failed: {line}: {e}");
                eprintln!("Error: {e}");
            }
        }
    }
}
