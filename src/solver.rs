//! A depth-limited minimax agent for Connect 4

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::board::{Board, Side};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::heuristic::Evaluator;
use crate::terminal::winner;

/// The side the agent plays, and maximises for
pub const AI_SIDE: Side = Side::PlayerTwo;
/// The side the agent plays against
pub const OPPONENT_SIDE: Side = Side::PlayerOne;

/// Score of a position the agent has won
pub const WIN_SCORE: i32 = 100_000;
/// Score of a position the opponent has won
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Picks the provisional best column before any child has been searched
///
/// Implementations must return one of the given columns. The slice is never
/// empty.
pub trait TieBreak {
    fn choose(&mut self, columns: &[usize]) -> usize;
}

impl<F: FnMut(&[usize]) -> usize> TieBreak for F {
    fn choose(&mut self, columns: &[usize]) -> usize {
        self(columns)
    }
}

/// Uniform choice backed by a seedable generator
pub struct RandomTieBreak {
    rng: StdRng,
}

impl RandomTieBreak {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for RandomTieBreak {
    fn choose(&mut self, columns: &[usize]) -> usize {
        columns.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Always the leftmost column
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstColumn;

impl TieBreak for FirstColumn {
    fn choose(&mut self, columns: &[usize]) -> usize {
        columns[0]
    }
}

/// The column picked at a search node and its score
///
/// `column` is `None` for terminal nodes, nodes at the depth limit and
/// positions with no legal moves.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// An agent choosing moves with fixed-depth minimax and alpha-beta pruning
///
/// # Position Scoring
/// Scores are always from the agent's ([`AI_SIDE`]) point of view. A won
/// position scores [`WIN_SCORE`], a lost one [`LOSS_SCORE`] and a full board
/// 0. Positions at the depth limit are scored by the [`Evaluator`].
pub struct Solver<T: TieBreak = RandomTieBreak> {
    depth: usize,
    evaluator: Evaluator,
    tie_break: T,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` searching `depth` plies with a randomly seeded tie-break
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            evaluator: Evaluator::default(),
            tie_break: RandomTieBreak::new(),
            node_count: 0,
        }
    }

    /// Creates a `Solver` from validated settings
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tie_break = match config.seed {
            Some(seed) => RandomTieBreak::with_seed(seed),
            None => RandomTieBreak::new(),
        };
        Ok(Self {
            depth: config.depth,
            evaluator: Evaluator::new(config.penalty),
            tie_break,
            node_count: 0,
        })
    }
}

impl<T: TieBreak> Solver<T> {
    /// Replaces the tie-break source of an existing `Solver`
    pub fn with_tie_break<U: TieBreak>(self, tie_break: U) -> Solver<U> {
        Solver {
            depth: self.depth,
            evaluator: self.evaluator,
            tie_break,
            node_count: self.node_count,
        }
    }

    /// Replaces the evaluator of an existing `Solver`
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Performs game tree search
    ///
    /// `maximizing` is true when it is the agent's turn to move on `board`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        match winner(board) {
            Some(OPPONENT_SIDE) => return SearchResult::leaf(LOSS_SCORE),
            Some(AI_SIDE) => return SearchResult::leaf(WIN_SCORE),
            _ => {}
        }
        if depth == 0 {
            return SearchResult::leaf(self.evaluator.score(board, AI_SIDE));
        }

        let moves = board.valid_columns();
        if moves.is_empty() {
            return SearchResult::leaf(0);
        }

        let mut best = SearchResult {
            column: Some(self.tie_break.choose(&moves)),
            score: if maximizing { i32::MIN } else { i32::MAX },
        };
        let mover = if maximizing { AI_SIDE } else { OPPONENT_SIDE };

        for (column, child) in board.children(mover) {
            let score = self.search(&child, depth - 1, alpha, beta, !maximizing).score;

            // only a strictly better score replaces the current best
            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                trace!("cut-off after column {} at depth {}", column, depth);
                break;
            }
        }

        best
    }

    /// Chooses a move for [`AI_SIDE`] on `board`
    ///
    /// Returns no column when the board is already full.
    pub fn solve(&mut self, board: &Board) -> SearchResult {
        let start = self.node_count;
        let result = self.search(board, self.depth, i32::MIN, i32::MAX, true);
        debug!(
            "depth {}: column {:?}, score {}, {} nodes",
            self.depth,
            result.column,
            result.score,
            self.node_count - start
        );
        result
    }

    /// Chooses a move for `side`, scoring from that side's point of view
    pub fn solve_for(&mut self, board: &Board, side: Side) -> SearchResult {
        if side == AI_SIDE {
            self.solve(board)
        } else {
            // colours don't change column indices
            self.solve(&board.swapped())
        }
    }
}
