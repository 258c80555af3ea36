//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the frontier with a windowed positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, solver::{Solver, FirstColumn}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("11223")?;
//! let mut solver = Solver::new(3).with_tie_break(FirstColumn);
//! let result = solver.solve(&board);
//!
//! // player two has to block the three on the bottom row
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod board;

pub mod terminal;

pub mod heuristic;

pub mod solver;

pub mod game;

pub mod display;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const ALIGN: usize = 4;

/// Index of the middle column
pub const CENTER: usize = WIDTH / 2;

// a line of four has to fit both ways
const_assert!(WIDTH >= ALIGN && HEIGHT >= ALIGN);
