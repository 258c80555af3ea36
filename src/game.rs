//! The live game: one board mutated by confirmed moves

use log::info;

use crate::board::{Board, Side};
use crate::error::MoveError;
use crate::terminal::{game_state, GameState};
use crate::WIDTH;

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    /// Moves played so far as 1-indexed column digits
    pub moves: String,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::PlayerOne,
            moves: String::new(),
            state: GameState::Playing,
        }
    }

    /// Replays a string of 1-indexed column digits from the start
    pub fn from_moves(moves: &str) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for (position, column_char) in moves.chars().enumerate() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = game.play_checked(column as usize)?;
                }
                _ => {
                    return Err(MoveError::Parse {
                        position,
                        found: column_char,
                    })
                }
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Plays a 1-indexed column for the side to move, rejecting moves that
    /// are out of range, into a full column or after the game has ended
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(MoveError::OutOfRange {
                column: column_one_indexed,
            });
        }
        let column = column_one_indexed - 1;
        self.board.play(column, self.to_move)?;

        info!("{:?} played column {}", self.to_move, column_one_indexed);
        self.moves.push_str(&column_one_indexed.to_string());
        self.to_move = self.to_move.opponent();
        self.state = game_state(&self.board);

        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
