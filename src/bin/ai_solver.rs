use clap::Parser;
use puzzle8_solver::engine::Board;
use puzzle8_solver::solver::solve_astar;
use puzzle8_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a board file (3 lines of 3 characters, '1'-'8' and '.').
    /// If omitted, a scramble is generated instead.
    board_file: Option<PathBuf>,

    /// Number of random moves used to scramble when no file is given
    #[clap(short, long, default_value_t = 64)]
    shuffle: usize,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = match &args.board_file {
        Some(path) => match read_board_file(path) {
            Ok(board) => {
                println!("Loaded board from {}\n", path.display());
                board
            }
            Err(e) => {
                eprintln!("Failed to read board from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!(
                "Scrambled with {} moves (seed {})\n",
                args.shuffle, args.seed
            );
            Board::shuffled_with_seed(args.shuffle, args.seed)
        }
    };

    println!("Initial board state:\n{}", board);
    println!("Searching for a shortest solution...\n");

    match solve_astar(&board) {
        Some(solution) => {
            println!(
                "Solved in {} moves ({} states expanded):\n",
                solution.steps, solution.nodes_expanded
            );
            for (i, state) in solution.path.iter().enumerate().skip(1) {
                println!("Move {}:\n{}", i, state);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("This board is unsolvable.");
            ExitCode::FAILURE
        }
    }
}
