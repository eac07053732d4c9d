use puzzle8_solver::engine::{Board, Game, DEFAULT_SHUFFLE_MOVES, GRID_SIZE};
use std::io::{self, Write};

fn main() {
    let mut next_seed: u64 = 1;
    let mut game = Game::new_with_board(Board::shuffled_with_seed(DEFAULT_SHUFFLE_MOVES, next_seed));
    println!("Welcome to the 8-puzzle!");

    loop {
        println!("---------------------");
        println!("Moves: {}", game.moves());
        println!("{}", game.board());

        if game.is_won() {
            println!("---------------------");
            println!("🎉 SOLVED in {} moves! 🎉", game.moves());
            println!("---------------------");
            break;
        }

        print!("Enter a move (col row), 'u' to undo, 'n' for a new scramble, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if game.undo_last_move() {
                println!("Move undone.");
            } else {
                println!("Cannot undo further (no moves made yet).");
            }
            continue;
        }

        if trimmed_input == "n" {
            next_seed += 1;
            game = Game::new_with_board(Board::shuffled_with_seed(DEFAULT_SHUFFLE_MOVES, next_seed));
            println!("New scramble.");
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() == 2 {
            if let (Ok(col), Ok(row)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                if col < GRID_SIZE && row < GRID_SIZE {
                    if game.process_move(col, row) {
                        println!("Move processed.");
                    } else {
                        println!(
                            "Invalid move: the cell at ({}, {}) is empty or not next to the empty slot.",
                            col, row
                        );
                    }
                } else {
                    println!(
                        "Invalid coordinates: column and row must be between 0 and {}.",
                        GRID_SIZE - 1
                    );
                }
            } else {
                println!("Invalid input: enter numbers for column and row (e.g., '1 2'), 'u', 'n', or 'q'.");
            }
        } else {
            println!("Invalid input format. Use 'col row', 'u', 'n', or 'q'.");
        }
    }
}
