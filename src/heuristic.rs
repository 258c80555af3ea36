//! Positional scoring of non-terminal boards
//!
//! A board is scored by sliding a window of four cells over every row,
//! column and diagonal, rewarding windows that a side can still complete,
//! plus a bonus for pieces in the centre column.

use crate::board::{Board, Cell, Side};
use crate::{ALIGN, CENTER, HEIGHT, WIDTH};

/// Bonus per piece in the centre column
pub const CENTER_WEIGHT: i32 = 3;
/// A complete line of four
pub const FOUR_WEIGHT: i32 = 100;
/// Three pieces and a gap
pub const THREE_WEIGHT: i32 = 5;
/// Two pieces and two gaps
pub const TWO_WEIGHT: i32 = 2;
/// Penalty for three threatening pieces and a gap
pub const THREAT_PENALTY: i32 = 4;

/// Whose open threes are penalised when scoring a window
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum DefensivePenalty {
    /// Always penalise player one's threats, whichever side is being scored
    #[default]
    PlayerOneThreats,
    /// Penalise the threats of the scored side's opponent
    OpponentThreats,
}

impl DefensivePenalty {
    fn threatening_side(self, side: Side) -> Side {
        match self {
            DefensivePenalty::PlayerOneThreats => Side::PlayerOne,
            DefensivePenalty::OpponentThreats => side.opponent(),
        }
    }
}

/// Scores boards from one side's point of view
#[derive(Copy, Clone, Debug, Default)]
pub struct Evaluator {
    penalty: DefensivePenalty,
}

impl Evaluator {
    pub fn new(penalty: DefensivePenalty) -> Self {
        Self { penalty }
    }

    pub fn penalty(&self) -> DefensivePenalty {
        self.penalty
    }

    /// Total desirability of `board` for `side`
    pub fn score(&self, board: &Board, side: Side) -> i32 {
        let center = board
            .column(CENTER)
            .iter()
            .filter(|&&cell| cell == Cell::from(side))
            .count() as i32;

        windows()
            .map(|window| self.score_window(board, &window, side))
            .sum::<i32>()
            + center * CENTER_WEIGHT
    }

    fn score_window(&self, board: &Board, window: &Window, side: Side) -> i32 {
        let cells = window.map(|(column, row)| board.cell(column, row));
        let count = |cell: Cell| cells.iter().filter(|&&c| c == cell).count();

        let own = count(side.into());
        let empty = count(Cell::Empty);

        let mut score = match (own, empty) {
            (4, _) => FOUR_WEIGHT,
            (3, 1) => THREE_WEIGHT,
            (2, 2) => TWO_WEIGHT,
            _ => 0,
        };

        let threat = self.penalty.threatening_side(side);
        if count(threat.into()) == 3 && empty == 1 {
            score -= THREAT_PENALTY;
        }
        score
    }
}

/// Convenience wrapper scoring with the default penalty
pub fn score(board: &Board, side: Side) -> i32 {
    Evaluator::default().score(board, side)
}

/// Coordinates `(column, row)` of four consecutive cells
pub type Window = [(usize, usize); ALIGN];

/// Every horizontal, vertical and diagonal window on the board
pub fn windows() -> impl Iterator<Item = Window> {
    let horizontal = (0..HEIGHT).flat_map(|row| {
        (0..=WIDTH - ALIGN).map(move |column| line(column, row, 1, 0))
    });
    let vertical = (0..WIDTH).flat_map(|column| {
        (0..=HEIGHT - ALIGN).map(move |row| line(column, row, 0, 1))
    });
    let diagonal = (0..=HEIGHT - ALIGN).flat_map(|row| {
        (0..=WIDTH - ALIGN).map(move |column| line(column, row, 1, 1))
    });
    // starts on the lowest cell and climbs to the right
    let anti_diagonal = (0..=HEIGHT - ALIGN).flat_map(|row| {
        (0..=WIDTH - ALIGN).map(move |column| line(column, row + ALIGN - 1, 1, -1))
    });

    horizontal
        .chain(vertical)
        .chain(diagonal)
        .chain(anti_diagonal)
}

fn line(column: usize, row: usize, dx: usize, dy: isize) -> Window {
    let mut window = [(0, 0); ALIGN];
    for (i, cell) in window.iter_mut().enumerate() {
        *cell = (
            column + dx * i,
            (row as isize + dy * i as isize) as usize,
        );
    }
    window
}
