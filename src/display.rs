//! Terminal rendering of a board

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent, Stylize},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH};

fn colour(cell: Cell) -> Color {
    match cell {
        Cell::PlayerOne => Color::Red,
        Cell::PlayerTwo => Color::Yellow,
        Cell::Empty => Color::DarkBlue,
    }
}

/// Draws the board below the cursor with the column numbers on top
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits below the last row
    let (origin_x, bottom_y) = crossterm::cursor::position()?;
    let top_y = bottom_y.saturating_sub(HEIGHT as u16);

    for column in 0..WIDTH {
        for row in 0..HEIGHT {
            stdout
                .queue(MoveTo(origin_x + column as u16, top_y + row as u16))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(colour(board.cell(column, row))),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x, bottom_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
