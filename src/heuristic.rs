//! Positional scoring for boards the search cannot resolve to a win, loss
//! or draw within its depth limit

use crate::board::{Board, Side};
use crate::outcome::WINDOWS;
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

// window weights; the defensive penalty is intentionally weaker than the
// symmetric offensive bonus
const WINDOW_WIN: i32 = 10_000;
const WINDOW_THREE: i32 = 100;
const WINDOW_TWO: i32 = 10;
const WINDOW_OPPONENT_THREE: i32 = -80;

/// Bonus per own piece in the center column
const CENTER_BONUS: i32 = 6;

fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    let mut score = 0;

    if own == WIN_LENGTH {
        score += WINDOW_WIN;
    } else if own == 3 && empty == 1 {
        score += WINDOW_THREE;
    } else if own == 2 && empty == 2 {
        score += WINDOW_TWO;
    }

    if opponent == 3 && empty == 1 {
        score += WINDOW_OPPONENT_THREE;
    }

    score
}

/// Scores `board` for `side` without searching.
///
/// Every four-cell window contributes by its composition, plus a bonus for
/// each of `side`'s pieces in the center column, as central tiles sit on
/// the most potential lines. The score is a relative measure only; forced
/// lines deeper than one move are the search's business.
pub fn score_position(board: &Board, side: Side) -> i32 {
    let own = side.cell();
    let opponent = side.opponent().cell();

    let mut score = 0;

    let center = WIDTH / 2;
    for row in 0..HEIGHT {
        if board.get(row, center) == own {
            score += CENTER_BONUS;
        }
    }

    for window in WINDOWS.iter() {
        let mut own_count = 0;
        let mut opponent_count = 0;
        let mut empty = 0;

        for &(row, column) in window.iter() {
            let cell = board.get(row, column);
            if cell == own {
                own_count += 1;
            } else if cell == opponent {
                opponent_count += 1;
            } else {
                empty += 1;
            }
        }

        score += score_window(own_count, opponent_count, empty);
    }

    score
}
