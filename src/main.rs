use anyhow::Result;
use clap::Parser;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::Side,
    config::{EngineConfig, DEFAULT_DEPTH},
    display::display,
    game::Game,
    solver::{Solver, WIN_SCORE},
    terminal::GameState,
};

/// Play Connect 4 against a minimax agent
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax agent")]
struct Cli {
    /// Number of plies the AI searches ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Seed for the AI's choice between equally scored columns
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI play player 1 and move first
    #[arg(long)]
    ai_first: bool,

    /// Let the AI play both sides
    #[arg(long)]
    self_play: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            depth: self.depth,
            seed: self.seed,
            ..EngineConfig::default()
        }
    }

    fn ai_controls(&self, side: Side) -> bool {
        self.self_play
            || match side {
                Side::PlayerOne => self.ai_first,
                Side::PlayerTwo => !self.ai_first,
            }
    }
}

fn player_number(side: Side) -> usize {
    match side {
        Side::PlayerOne => 1,
        Side::PlayerTwo => 2,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut solver = Solver::from_config(&cli.engine_config())?;
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(game.board())?;

        match game.state {
            GameState::Playing => {
                let side = game.to_move();
                let next_move = if cli.ai_controls(side) {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if cli.self_play {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let result = solver.solve_for(game.board(), side);
                    let column = match result.column {
                        Some(column) => column,
                        None => {
                            println!("Draw!");
                            break;
                        }
                    };

                    let player = player_number(side);
                    if result.score >= WIN_SCORE {
                        println!("Player {} can force a win.", player);
                    } else if result.score <= -WIN_SCORE {
                        println!("Player {} expects to lose.", player);
                    } else {
                        println!("Player {} rates the position at {}.", player, result.score);
                    }

                    println!("Player {} picked column {}.", player, column + 1);
                    column + 1

                // human player
                } else {
                    print!(
                        "Player {}'s turn. Please pick a column 1-7: ",
                        player_number(side)
                    );
                    stdout().flush()?;
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Please enter an integer 1-7.");
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
