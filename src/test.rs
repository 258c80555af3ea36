#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::board::{Board, Cell, Side};
    use crate::config::EngineConfig;
    use crate::error::{ConfigError, MoveError};
    use crate::game::Game;
    use crate::heuristic::{self, windows, DefensivePenalty, Evaluator};
    use crate::solver::*;
    use crate::terminal::{game_state, is_terminal, winner, GameState};
    use crate::{HEIGHT, WIDTH};

    // builds a board from per-column stacks listed bottom to top,
    // 'X' for player one and 'O' for player two
    fn stacks(columns: [&str; WIDTH]) -> Result<Board> {
        let mut board = Board::new();
        for (column, pieces) in columns.iter().enumerate() {
            for piece in pieces.chars() {
                let side = match piece {
                    'X' => Side::PlayerOne,
                    'O' => Side::PlayerTwo,
                    _ => return Err(anyhow!("unknown piece '{}'", piece)),
                };
                board = board.place(column, side)?;
            }
        }
        Ok(board)
    }

    // exhaustive minimax without pruning, for comparison
    fn minimax(board: &Board, depth: usize, maximizing: bool, nodes: &mut usize) -> SearchResult {
        *nodes += 1;
        let leaf = |score| SearchResult {
            column: None,
            score,
        };
        match winner(board) {
            Some(Side::PlayerOne) => return leaf(LOSS_SCORE),
            Some(Side::PlayerTwo) => return leaf(WIN_SCORE),
            None => {}
        }
        if depth == 0 {
            return leaf(heuristic::score(board, AI_SIDE));
        }
        if board.valid_columns().is_empty() {
            return leaf(0);
        }

        let mover = if maximizing { AI_SIDE } else { OPPONENT_SIDE };
        let mut best = leaf(if maximizing { i32::MIN } else { i32::MAX });
        for (column, child) in board.children(mover) {
            let score = minimax(&child, depth - 1, !maximizing, nodes).score;
            if (maximizing && score > best.score) || (!maximizing && score < best.score) {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        best
    }

    fn draw_board() -> Result<Board> {
        stacks([
            "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "XXOOXX",
        ])
    }

    #[test]
    pub fn gravity_invariant() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut board = Board::new();
            let mut side = Side::PlayerOne;
            while let Some(&column) = board.valid_columns().choose(&mut rng) {
                board = board.place(column, side)?;
                side = side.opponent();

                for column in 0..WIDTH {
                    let cells = board.column(column);
                    let first_piece = cells.iter().position(|c| !c.is_empty()).unwrap_or(HEIGHT);
                    assert!(cells[..first_piece].iter().all(Cell::is_empty));
                    assert!(cells[first_piece..].iter().all(|c| !c.is_empty()));
                }
            }
            assert!(board.is_full());
            assert_eq!(board.num_moves(), WIDTH * HEIGHT);
        }
        Ok(())
    }

    #[test]
    pub fn placement() -> Result<()> {
        let board = Board::new();
        assert_eq!(board.valid_columns(), (0..WIDTH).collect::<Vec<_>>());
        assert_eq!(board.landing_row(2), Some(HEIGHT - 1));

        let next = board.place(2, Side::PlayerOne)?;
        // the parent is left untouched
        assert_eq!(board, Board::new());
        assert_eq!(next.cell(2, HEIGHT - 1), Cell::PlayerOne);
        assert_eq!(next.landing_row(2), Some(HEIGHT - 2));

        let full = stacks(["", "", "XOXOXO", "", "", "", ""])?;
        assert_eq!(full.landing_row(2), None);
        assert_eq!(full.valid_columns(), vec![0, 1, 3, 4, 5, 6]);
        assert_eq!(
            full.place(2, Side::PlayerTwo),
            Err(MoveError::ColumnFull { column: 3 })
        );
        assert_eq!(
            full.place(WIDTH, Side::PlayerTwo),
            Err(MoveError::OutOfRange { column: WIDTH + 1 })
        );

        let children: Vec<usize> = full.children(Side::PlayerOne).map(|(c, _)| c).collect();
        assert_eq!(children, vec![0, 1, 3, 4, 5, 6]);
        Ok(())
    }

    #[test]
    pub fn move_strings() -> Result<()> {
        let board = Board::from_moves("4453")?;
        assert_eq!(board.cell(3, 5), Cell::PlayerOne);
        assert_eq!(board.cell(3, 4), Cell::PlayerTwo);
        assert_eq!(board.cell(4, 5), Cell::PlayerOne);
        assert_eq!(board.cell(2, 5), Cell::PlayerTwo);
        assert_eq!(board.count(Side::PlayerOne), 2);

        assert_eq!(
            Board::from_moves("12a"),
            Err(MoveError::Parse {
                position: 2,
                found: 'a'
            })
        );
        assert_eq!(
            Board::from_moves("8"),
            Err(MoveError::Parse {
                position: 0,
                found: '8'
            })
        );
        assert_eq!(
            Board::from_moves("1111111"),
            Err(MoveError::ColumnFull { column: 1 })
        );
        assert_eq!(Board::from_moves("12121212"), Err(MoveError::GameOver));
        Ok(())
    }

    #[test]
    pub fn vertical_win_path() -> Result<()> {
        let mut board = Board::new();
        for i in 0..4 {
            assert_eq!(winner(&board), None);
            assert!(!is_terminal(&board));
            board = board.place(3, Side::PlayerOne)?;
            if i < 3 {
                board = board.place(0, Side::PlayerTwo)?;
            }
        }
        assert_eq!(winner(&board), Some(Side::PlayerOne));
        assert_eq!(game_state(&board), GameState::PlayerOneWin);
        Ok(())
    }

    #[test]
    pub fn win_detection() -> Result<()> {
        let lines = [
            // horizontal
            (["X", "X", "X", "X", "", "", ""], ["X", "X", "", "X", "", "", ""]),
            // vertical
            (["", "", "XXXX", "", "", "", ""], ["", "", "XXOX", "", "", "", ""]),
            // rising to the right
            (["X", "OX", "OOX", "OOOX", "", "", ""], ["X", "OX", "OOX", "OOO", "", "", ""]),
            // falling to the right
            (["OOOX", "OOX", "OX", "X", "", "", ""], ["OOOX", "OOX", "OX", "", "", "", ""]),
        ];

        for (four, gap) in lines.iter() {
            let four = stacks(*four)?;
            let gap = stacks(*gap)?;

            assert_eq!(winner(&four), Some(Side::PlayerOne));
            assert_eq!(winner(&four.swapped()), Some(Side::PlayerTwo));
            assert_eq!(winner(&gap), None);
            assert_eq!(winner(&gap.swapped()), None);
        }
        Ok(())
    }

    #[test]
    pub fn draw_detection() -> Result<()> {
        let board = draw_board()?;
        assert!(board.valid_columns().is_empty());
        assert_eq!(winner(&board), None);
        assert_eq!(game_state(&board), GameState::Draw);
        assert!(is_terminal(&board));

        let mut solver = Solver::new(3);
        assert_eq!(
            solver.solve(&board),
            SearchResult {
                column: None,
                score: 0
            }
        );
        Ok(())
    }

    #[test]
    pub fn window_enumeration() {
        let all: Vec<_> = windows().collect();
        assert_eq!(all.len(), 69);
        for window in all.iter() {
            assert!(window.iter().all(|&(c, r)| c < WIDTH && r < HEIGHT));
        }
    }

    #[test]
    pub fn evaluator_scores() -> Result<()> {
        assert_eq!(heuristic::score(&Board::new(), Side::PlayerOne), 0);

        // a lone centre piece only earns the centre bonus
        let center = stacks(["", "", "", "X", "", "", ""])?;
        assert_eq!(heuristic::score(&center, Side::PlayerOne), 3);
        assert_eq!(heuristic::score(&center, Side::PlayerTwo), 0);

        // three and a gap beats two and two gaps
        let three = stacks(["", "", "", "", "", "", "OOO"])?;
        let two = stacks(["", "", "", "", "", "", "OO"])?;
        assert_eq!(heuristic::score(&three, Side::PlayerTwo), 7);
        assert_eq!(heuristic::score(&two, Side::PlayerTwo), 2);

        let three = three.swapped();
        let two = two.swapped();
        assert!(heuristic::score(&three, Side::PlayerOne) > heuristic::score(&two, Side::PlayerOne));
        Ok(())
    }

    #[test]
    pub fn defensive_penalty() -> Result<()> {
        let board = stacks(["", "", "", "", "", "", "XXX"])?;
        let symmetric = Evaluator::new(DefensivePenalty::OpponentThreats);

        // player one's open three is always penalised by default,
        // even when scoring for player one
        assert_eq!(heuristic::score(&board, Side::PlayerOne), 3);
        assert_eq!(heuristic::score(&board, Side::PlayerTwo), -4);

        assert_eq!(symmetric.score(&board, Side::PlayerOne), 7);
        assert_eq!(symmetric.score(&board, Side::PlayerTwo), -4);

        // player two's threats only count in symmetric mode
        let board = board.swapped();
        assert_eq!(heuristic::score(&board, Side::PlayerOne), 0);
        assert_eq!(symmetric.score(&board, Side::PlayerOne), -4);
        Ok(())
    }

    #[test]
    pub fn alpha_beta_equivalence() -> Result<()> {
        let positions = ["", "4", "44", "4453", "11223", "3443522", "776655", "123456712"];

        for moves in positions.iter() {
            let board = Board::from_moves(moves)?;
            for depth in 1..=3 {
                let mut nodes = 0;
                let expected = minimax(&board, depth, true, &mut nodes);

                let mut solver = Solver::new(depth).with_tie_break(FirstColumn);
                let result = solver.search(&board, depth, i32::MIN, i32::MAX, true);

                assert_eq!(result, expected, "position '{}' at depth {}", moves, depth);
                assert!(solver.node_count <= nodes);
            }
        }
        Ok(())
    }

    #[test]
    pub fn terminal_short_circuit() -> Result<()> {
        let lost = stacks(["XXXX", "OOO", "", "", "", "", ""])?;
        let won = lost.swapped();

        let mut solver = Solver::new(5).with_tie_break(FirstColumn);
        for depth in 0..5 {
            let result = solver.search(&lost, depth, i32::MIN, i32::MAX, true);
            assert_eq!(result, SearchResult { column: None, score: LOSS_SCORE });

            let result = solver.search(&won, depth, i32::MIN, i32::MAX, false);
            assert_eq!(result, SearchResult { column: None, score: WIN_SCORE });
        }
        assert_eq!(solver.node_count, 10);
        Ok(())
    }

    #[test]
    pub fn takes_immediate_win() -> Result<()> {
        let board = stacks(["X", "X", "", "", "X", "", "OOO"])?;
        let mut solver = Solver::new(3).with_tie_break(FirstColumn);
        let result = solver.solve(&board);

        assert_eq!(result.column, Some(6));
        assert_eq!(result.score, WIN_SCORE);
        Ok(())
    }

    #[test]
    pub fn blocks_immediate_loss() -> Result<()> {
        let board = Board::from_moves("11223")?;
        let mut solver = Solver::new(3).with_tie_break(FirstColumn);
        let result = solver.solve(&board);

        assert_eq!(result.column, Some(3));
        assert!(result.score > LOSS_SCORE);
        Ok(())
    }

    #[test]
    pub fn solves_for_player_one() -> Result<()> {
        let board = stacks(["XXX", "", "", "", "", "O", "OO"])?;
        let mut solver = Solver::new(3).with_tie_break(FirstColumn);
        let result = solver.solve_for(&board, Side::PlayerOne);

        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, WIN_SCORE);
        Ok(())
    }

    #[test]
    pub fn tie_break_sources() -> Result<()> {
        let mut seeded = RandomTieBreak::with_seed(42);
        for _ in 0..10 {
            let choice = seeded.choose(&[2, 5]);
            assert!(choice == 2 || choice == 5);
        }

        let mut last = |columns: &[usize]| columns[columns.len() - 1];
        assert_eq!(last.choose(&[0, 3, 6]), 6);

        let board = Board::from_moves("44")?;
        let first = Solver::new(3).with_tie_break(RandomTieBreak::with_seed(1)).solve(&board);
        let second = Solver::new(3).with_tie_break(RandomTieBreak::with_seed(1)).solve(&board);
        assert_eq!(first, second);
        assert!(first.column.is_some());
        Ok(())
    }

    #[test]
    pub fn engine_config() -> Result<()> {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 3);
        config.validate()?;

        let zero = EngineConfig {
            depth: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            zero.validate(),
            Err(ConfigError::Validation("depth must be > 0".into()))
        );
        assert_eq!(
            zero.validate().map_err(|e| e.to_string()),
            Err("config validation error: depth must be > 0".to_string())
        );

        let deep = EngineConfig {
            depth: 11,
            ..EngineConfig::default()
        };
        assert!(Solver::from_config(&deep).is_err());

        let seeded = EngineConfig {
            seed: Some(3),
            penalty: DefensivePenalty::OpponentThreats,
            ..EngineConfig::default()
        };
        let solver = Solver::from_config(&seeded)?;
        assert_eq!(solver.depth(), 3);
        Ok(())
    }

    #[test]
    pub fn game_moves() -> Result<()> {
        let mut game = Game::new();
        assert_eq!(game.play_checked(0), Err(MoveError::OutOfRange { column: 0 }));
        assert_eq!(game.play_checked(8), Err(MoveError::OutOfRange { column: 8 }));
        assert_eq!(game.play_checked(4)?, GameState::Playing);
        assert_eq!(game.to_move(), Side::PlayerTwo);
        assert_eq!(game.moves, "4");

        let mut game = Game::from_moves("1212121")?;
        assert_eq!(game.state, GameState::PlayerOneWin);
        assert_eq!(game.play_checked(3), Err(MoveError::GameOver));
        assert_eq!(game.moves, "1212121");

        let mut game = Game::from_moves("111111")?;
        assert_eq!(
            game.play_checked(1),
            Err(MoveError::ColumnFull { column: 1 })
        );
        assert_eq!(game.to_move(), Side::PlayerOne);
        Ok(())
    }
}
