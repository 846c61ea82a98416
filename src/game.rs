//! Game orchestration: the boundary between the engine and a front-end
//!
//! The orchestrator owns the authoritative board, enforces turn order and
//! the end of the game, asks the search engine for the machine's replies
//! and for hints, and offers a single-step undo. Everything it exposes is
//! a plain value; no rendering or input concern reaches this layer.

use std::str::FromStr;

use anyhow::anyhow;
use thiserror::Error;

use crate::board::{Board, ColumnFull, Side};
use crate::outcome::{check_outcome, Outcome};
use crate::search::Searcher;

/// The number of hints a player may request over one game
pub const MAX_HINTS: u8 = 2;

/// Search depth presets, selected by the player before a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The search depth this difficulty plays at
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "m" | "medium" => Ok(Difficulty::Medium),
            "h" | "hard" => Ok(Difficulty::Hard),
            _ => Err(anyhow!("unknown difficulty: {}", s.trim())),
        }
    }
}

/// A move or request the orchestrator refused; the game state is unchanged
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    ColumnFull(#[from] ColumnFull),
    #[error("it is not the {0:?} side's turn")]
    NotYourTurn(Side),
    #[error("the game is already over")]
    GameOver,
    #[error("the engine found no legal column")]
    NoLegalMoves,
    #[error("no hints remaining")]
    HintsExhausted,
    #[error("undo is no longer available")]
    UndoUnavailable,
}

/// The machine's applied reply
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MachineMove {
    pub column: usize,
    pub score: i32,
}

/// A live game between the human and the machine.
///
/// The live board is mutated only after a move has been fully validated;
/// the search engine works on its own copies.
pub struct Game {
    board: Board,
    turn: Side,
    outcome: Option<Outcome>,
    searcher: Searcher,
    difficulty: Difficulty,
    undo_snapshot: Option<Board>,
    undo_used: bool,
    hints_used: u8,
}

impl Game {
    /// Starts a fresh game with every cell empty and the human to move
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_searcher(difficulty, Searcher::new())
    }

    /// Starts a fresh game driven by a caller-supplied searcher, e.g. one
    /// seeded for reproducible play
    pub fn with_searcher(difficulty: Difficulty, searcher: Searcher) -> Self {
        Self::from_position(difficulty, searcher, Board::new(), Side::Human)
    }

    /// Resumes play from an arbitrary position
    pub fn from_position(
        difficulty: Difficulty,
        searcher: Searcher,
        board: Board,
        turn: Side,
    ) -> Self {
        let outcome = check_outcome(&board);
        Self {
            board,
            turn,
            outcome,
            searcher,
            difficulty,
            undo_snapshot: None,
            undo_used: false,
            hints_used: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn hints_left(&self) -> u8 {
        MAX_HINTS - self.hints_used
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_used && self.undo_snapshot.is_some() && self.outcome.is_none()
    }

    /// The total number of nodes the engine has searched this game (for
    /// diagnostics only)
    pub fn nodes_searched(&self) -> usize {
        self.searcher.node_count
    }

    /// Plays the human's piece into `column` (0-indexed).
    ///
    /// Refused when the game is over, when it is not the human's turn or
    /// when the column is full; the board is untouched on refusal.
    pub fn play_human(&mut self, column: usize) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.turn != Side::Human {
            return Err(GameError::NotYourTurn(Side::Human));
        }

        let snapshot = self.board;
        self.board.drop_piece(column, Side::Human)?;
        self.undo_snapshot = Some(snapshot);

        self.outcome = check_outcome(&self.board);
        if self.outcome.is_none() {
            self.turn = Side::Machine;
        }
        Ok(())
    }

    /// Computes and applies the machine's reply at the game's difficulty
    pub fn play_machine(&mut self) -> Result<MachineMove, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.turn != Side::Machine {
            return Err(GameError::NotYourTurn(Side::Machine));
        }

        let result = self.searcher.best_move(&self.board, self.difficulty.depth());
        let column = result.column.ok_or(GameError::NoLegalMoves)?;
        self.board.drop_piece(column, Side::Machine)?;

        self.outcome = check_outcome(&self.board);
        self.turn = Side::Human;
        Ok(MachineMove {
            column,
            score: result.score,
        })
    }

    /// Suggests the strongest column for the human, spending one of the
    /// game's hints
    pub fn hint(&mut self) -> Result<usize, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.turn != Side::Human {
            return Err(GameError::NotYourTurn(Side::Human));
        }
        if self.hints_used >= MAX_HINTS {
            return Err(GameError::HintsExhausted);
        }

        let result = self.searcher.hint(&self.board);
        let column = result.column.ok_or(GameError::NoLegalMoves)?;
        self.hints_used += 1;
        Ok(column)
    }

    /// Rewinds to the position before the most recent human move.
    ///
    /// Available once per game, and only while the game is still live.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.undo_used {
            return Err(GameError::UndoUnavailable);
        }
        let snapshot = self
            .undo_snapshot
            .take()
            .ok_or(GameError::UndoUnavailable)?;

        self.board = snapshot;
        self.turn = Side::Human;
        self.undo_used = true;
        Ok(())
    }
}
