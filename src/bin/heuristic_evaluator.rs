use puzzle8_solver::engine::Board;
use puzzle8_solver::heuristics;
use puzzle8_solver::solver::{solve_astar_with, Heuristic};

const NUM_SCRAMBLES: usize = 20;
const SHUFFLE_MOVES: usize = 40;
const START_SEED: u64 = 0;

fn main() {
    let strategies: Vec<(&str, Heuristic)> = vec![
        ("Misplaced tiles", heuristics::misplaced_tiles),
        ("Manhattan", heuristics::manhattan),
        ("Linear conflict", heuristics::linear_conflict),
    ];

    let mut total_expanded = vec![0u64; strategies.len()];
    let mut total_steps = 0u64;

    println!(
        "Evaluating {} heuristics on {} scrambles of {} moves...",
        strategies.len(),
        NUM_SCRAMBLES,
        SHUFFLE_MOVES
    );

    for scramble_idx in 0..NUM_SCRAMBLES {
        let seed = START_SEED + scramble_idx as u64;
        let board = Board::shuffled_with_seed(SHUFFLE_MOVES, seed);

        let mut optimal_steps = None;
        for (i, (name, heuristic)) in strategies.iter().enumerate() {
            let solution = solve_astar_with(&board, *heuristic)
                .expect("boards scrambled by legal moves are always solvable");

            // Every admissible heuristic must find the same optimal length.
            match optimal_steps {
                None => {
                    optimal_steps = Some(solution.steps);
                    total_steps += u64::from(solution.steps);
                }
                Some(expected) => assert_eq!(
                    solution.steps, expected,
                    "{} found a non-optimal solution on seed {}",
                    name, seed
                ),
            }
            total_expanded[i] += solution.nodes_expanded;
        }

        println!(
            "Scramble {:2} (seed {:2}): optimal length {}",
            scramble_idx,
            seed,
            optimal_steps.unwrap()
        );
    }

    println!("\nTotals over {} scrambles:", NUM_SCRAMBLES);
    println!("  Combined optimal moves: {}", total_steps);
    for (i, (name, _)) in strategies.iter().enumerate() {
        println!("  {:<16} {:>8} states expanded", name, total_expanded[i]);
    }
}
