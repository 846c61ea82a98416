use anyhow::{anyhow, Result};
use thiserror::Error;

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// The two participants in a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Machine => Cell::Machine,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Human,
    Machine,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// Error returned when a piece is dropped into a column whose top cell is
/// already occupied
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("column {0} is full")]
pub struct ColumnFull(pub usize);

/// The game grid, row 0 at the top
///
/// `Board` is a plain value: the search copies it freely and mutates only
/// its own copies, so the live board owned by the orchestrator is never
/// aliased by a speculative line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Replays a string of 1-indexed column digits, alternating sides
    /// starting with `first`
    pub fn from_moves<S: AsRef<str>>(first: Side, moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board
                        .drop_piece(column - 1, side)
                        .map_err(|err| anyhow!("invalid move '{}': {}", column_char, err))?;
                    side = side.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// A column can take another piece while its top cell is empty
    pub fn playable(&self, column: usize) -> bool {
        self.cells[0][column].is_empty()
    }

    /// The columns that can still take a piece, in ascending order
    pub fn open_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Drops `side`'s piece into `column` and returns the row it settles on.
    ///
    /// A full column is left untouched and reported as [`ColumnFull`].
    /// Panics if `column` is outside the board.
    pub fn drop_piece(&mut self, column: usize, side: Side) -> Result<usize, ColumnFull> {
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = side.cell();
                return Ok(row);
            }
        }
        Err(ColumnFull(column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let tile = match cell {
                    Cell::Empty => '.',
                    Cell::Human => 'X',
                    Cell::Machine => 'O',
                };
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
