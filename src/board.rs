//! Grid representation of a Connect 4 position

use crate::{error::MoveError, HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The side owning this cell, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::PlayerOne => Some(Side::PlayerOne),
            Cell::PlayerTwo => Some(Side::PlayerTwo),
            Cell::Empty => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A 7x6 Connect 4 grid
///
/// Cells are stored column by column, with row 0 at the top of each column.
/// Pieces fall to the highest free row index, so the empty cells of a column
/// always sit above its occupied ones.
///
/// `Board` is `Copy`: every hypothetical move made during search works on
/// its own snapshot.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; HEIGHT]; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; HEIGHT]; WIDTH],
        }
    }

    /// Builds a board from a string of 1-indexed column digits, players
    /// alternating and player one moving first
    ///
    /// Play stops being legal once a side has won, so a string that keeps
    /// going after a four in a row is rejected.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, MoveError> {
        let mut board = Self::new();
        let mut side = Side::PlayerOne;

        for (position, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if crate::terminal::winner(&board).is_some() {
                        return Err(MoveError::GameOver);
                    }
                    board.play(column - 1, side)?;
                    side = side.opponent();
                }
                _ => {
                    return Err(MoveError::Parse {
                        position,
                        found: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// The cells of one column, top to bottom
    pub fn column(&self, column: usize) -> &[Cell; HEIGHT] {
        &self.cells[column]
    }

    /// Columns that can still take a piece, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[column][0].is_empty()
    }

    pub fn is_full(&self) -> bool {
        !(0..WIDTH).any(|column| self.playable(column))
    }

    /// The row a piece dropped into `column` would land on
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[column][row].is_empty())
    }

    /// Returns a copy of this board with `side`'s piece dropped into `column`
    pub fn place(&self, column: usize, side: Side) -> Result<Self, MoveError> {
        let mut next = *self;
        next.play(column, side)?;
        Ok(next)
    }

    /// Drops `side`'s piece into `column` in place, returning the landing row
    pub fn play(&mut self, column: usize, side: Side) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange { column: column + 1 });
        }
        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column: column + 1 })?;
        self.cells[column][row] = side.into();
        Ok(row)
    }

    /// Every position reachable by one move of `side`, in ascending column order
    pub fn children(&self, side: Side) -> impl Iterator<Item = (usize, Board)> + '_ {
        (0..WIDTH).filter_map(move |column| {
            self.place(column, side).ok().map(|child| (column, child))
        })
    }

    /// Number of pieces `side` has on the board
    pub fn count(&self, side: Side) -> usize {
        let cell = Cell::from(side);
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// The same position with the two players' pieces exchanged
    pub fn swapped(&self) -> Self {
        let mut next = *self;
        for cell in next.cells.iter_mut().flatten() {
            *cell = match cell {
                Cell::PlayerOne => Cell::PlayerTwo,
                Cell::PlayerTwo => Cell::PlayerOne,
                Cell::Empty => Cell::Empty,
            };
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
