//! Win and draw detection over a board snapshot

use crate::board::{Board, Cell, Side};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// The four cell coordinates, as (row, column) pairs, of a winning
/// alignment; reported so a front-end can highlight them
pub type WinLine = [(usize, usize); WIN_LENGTH];

/// A decided game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Win { side: Side, line: WinLine },
    Draw,
}

/// The number of four-cell windows on the board across all four axes
pub const WINDOW_COUNT: usize = HEIGHT * (WIDTH - WIN_LENGTH + 1)
    + (HEIGHT - WIN_LENGTH + 1) * WIDTH
    + 2 * (HEIGHT - WIN_LENGTH + 1) * (WIDTH - WIN_LENGTH + 1);

/// Every four-cell window on the board, enumerated horizontal, vertical,
/// up-right diagonal then down-right diagonal, each group row-major
pub const WINDOWS: [WinLine; WINDOW_COUNT] = windows();

const fn windows() -> [WinLine; WINDOW_COUNT] {
    let mut windows = [[(0, 0); WIN_LENGTH]; WINDOW_COUNT];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + WIN_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WIN_LENGTH {
                windows[n][i] = (row, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    let mut row = 0;
    while row + WIN_LENGTH <= HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            let mut i = 0;
            while i < WIN_LENGTH {
                windows[n][i] = (row + i, column);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // up-right diagonal
    let mut row = WIN_LENGTH - 1;
    while row < HEIGHT {
        let mut column = 0;
        while column + WIN_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WIN_LENGTH {
                windows[n][i] = (row - i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // down-right diagonal
    let mut row = 0;
    while row + WIN_LENGTH <= HEIGHT {
        let mut column = 0;
        while column + WIN_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WIN_LENGTH {
                windows[n][i] = (row + i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    windows
}

/// Scans the board for a winning alignment, then for a draw.
///
/// The result is a pure function of the board contents and is recomputed
/// on every call. Under the gravity invariant at most one winning line can
/// exist on a reachable board; the scan order only decides which line is
/// reported for hand-built positions.
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    for line in WINDOWS.iter() {
        let (row, column) = line[0];
        let side = match board.get(row, column) {
            Cell::Empty => continue,
            Cell::Human => Side::Human,
            Cell::Machine => Side::Machine,
        };
        if line.iter().all(|&(r, c)| board.get(r, c) == side.cell()) {
            return Some(Outcome::Win { side, line: *line });
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}
