//! Detection of finished games

use crate::board::{Board, Cell, Side};
use crate::{ALIGN, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

impl From<Side> for GameState {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerOne => GameState::PlayerOneWin,
            Side::PlayerTwo => GameState::PlayerTwoWin,
        }
    }
}

/// Returns the side owning a line of four, if there is one
///
/// Vertical lines are checked first, then horizontal, then both diagonals.
pub fn winner(board: &Board) -> Option<Side> {
    vertical(board)
        .or_else(|| horizontal(board))
        .or_else(|| diagonal(board))
        .or_else(|| anti_diagonal(board))
}

/// Classifies a board as still playing, won or drawn
pub fn game_state(board: &Board) -> GameState {
    match winner(board) {
        Some(side) => side.into(),
        None if board.is_full() => GameState::Draw,
        None => GameState::Playing,
    }
}

pub fn is_terminal(board: &Board) -> bool {
    game_state(board).is_over()
}

// walks a line of cells counting equal, occupied neighbours
fn streak<I: Iterator<Item = (usize, usize)>>(board: &Board, mut line: I) -> Option<Side> {
    let (mut column, mut row) = line.next()?;
    let mut in_a_row = 0;
    for (next_column, next_row) in line {
        let cell = board.cell(column, row);
        if !cell.is_empty() && cell == board.cell(next_column, next_row) {
            in_a_row += 1;
        } else {
            in_a_row = 0;
        }
        if in_a_row >= ALIGN - 1 {
            return cell.side();
        }
        column = next_column;
        row = next_row;
    }
    None
}

fn vertical(board: &Board) -> Option<Side> {
    (0..WIDTH).find_map(|column| streak(board, (0..HEIGHT).map(move |row| (column, row))))
}

fn horizontal(board: &Board) -> Option<Side> {
    (0..HEIGHT).find_map(|row| streak(board, (0..WIDTH).map(move |column| (column, row))))
}

// checks the four cells from an anchor, stepping one column right and
// `dy` rows each time
fn aligned(board: &Board, column: usize, row: usize, dy: isize) -> Option<Side> {
    let side = board.cell(column, row).side()?;
    let all = (1..ALIGN).all(|i| {
        let y = (row as isize + dy * i as isize) as usize;
        board.cell(column + i, y) == Cell::from(side)
    });
    if all {
        Some(side)
    } else {
        None
    }
}

// down-right from each anchor
fn diagonal(board: &Board) -> Option<Side> {
    (0..=WIDTH - ALIGN).find_map(|column| {
        (0..=HEIGHT - ALIGN).find_map(|row| aligned(board, column, row, 1))
    })
}

// up-right from each anchor
fn anti_diagonal(board: &Board) -> Option<Side> {
    (0..=WIDTH - ALIGN).find_map(|column| {
        (ALIGN - 1..HEIGHT).find_map(|row| aligned(board, column, row, -1))
    })
}
