//! Interactive Tic-Tac-Toe demo for the move-selection engine.
//!
//! Play as X against the engine playing O. Pass `quick` as the first
//! argument for the easy tier, or a number 1-9 to limit the minimax depth.

use std::io::{self, Write};

use tictac_engine::{
    Board, LineClassifier, Mark, MoveSelector, SelectorConfig, Strategy, WinClassifier,
};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = config_from_args();

    println!("Tic-Tac-Toe vs tictac-engine");
    println!("============================");
    println!("Engine strategy: {:?}, depth {}", config.strategy, config.effective_depth());
    println!();

    let selector = MoveSelector::new(config);
    let classifier = LineClassifier::new();

    let mut board = Board::empty();
    let mut to_move = Mark::X;

    while classifier.winner(&board).is_none() && !board.is_full() {
        println!("{}", board);

        if to_move == Mark::X {
            // Human player (X)
            print!("Your move (enter row column, e.g. '1 2'): ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            io::stdin().read_line(&mut input).unwrap();

            let coords: Vec<usize> = input
                .trim()
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid move! Enter row and column (0-2).");
                continue;
            }

            let index = coords[0] * 3 + coords[1];
            if !board.is_empty_cell(index) {
                println!("That cell is taken! Try again.");
                continue;
            }

            board = board.with_move(index, Mark::X);
        } else {
            // Engine player (O)
            println!("Engine is thinking...");

            let (chosen, stats) = selector.choose_with_stats(&board, Mark::O);
            match chosen {
                Some(index) => {
                    println!(
                        "Engine chooses: {} (row {}, col {})",
                        index,
                        index / 3,
                        index % 3
                    );
                    board = board.with_move(index, Mark::O);
                    if stats.nodes_visited > 0 {
                        println!("{}", stats.summary());
                    }
                }
                None => {
                    println!("Engine has no move available.");
                    break;
                }
            }
        }

        to_move = to_move.opponent();
    }

    // Display final state
    println!("{}", board);

    // Report the result
    match classifier.winner(&board) {
        Some(winner) => println!("Player {} wins!", winner),
        None => println!("The game is a draw!"),
    }
}

fn config_from_args() -> SelectorConfig {
    let mut config = SelectorConfig::default();

    for arg in std::env::args().skip(1) {
        if arg.eq_ignore_ascii_case("quick") {
            config = config.with_strategy(Strategy::Quick);
        } else if let Ok(depth) = arg.parse::<u8>() {
            config = config.with_depth(depth);
        } else {
            eprintln!("Ignoring unrecognized argument: {arg}");
        }
    }

    config
}
