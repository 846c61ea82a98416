use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::board::{Board, Cell};
use connect4_engine::outcome::WinLine;
use connect4_engine::{HEIGHT, WIDTH};

/// Draws the board as colored tiles on a blue field, brightening the four
/// cells of a winning line when one is given
pub fn draw(board: &Board, winning_line: Option<&WinLine>) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(format!("{}\n", columns))))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let highlighted = winning_line
                .map(|line| line.iter().any(|&(r, c)| r == row && c == column))
                .unwrap_or(false);
            let background = if highlighted {
                Color::DarkGreen
            } else {
                Color::DarkBlue
            };

            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(match board.get(row, column) {
                        Cell::Human => Color::Red,
                        Cell::Machine => Color::Yellow,
                        Cell::Empty => background,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
