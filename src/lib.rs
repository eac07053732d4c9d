//! # 8-Puzzle Solver Library
//!
//! This library models the state space of the classic 3x3 sliding tile
//! puzzle and provides an A* solver that finds shortest solutions.
//!
//! It is used by three binaries:
//! - `human_player`: Interactive play via the command line, with undo.
//! - `ai_solver`: Loads or scrambles a board and prints an optimal move
//!   sequence.
//! - `heuristic_evaluator`: Compares the admissible heuristics by nodes
//!   expanded across seeded scrambles.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), tile type (`Tile`),
//!   interactive session state (`Game`), and the search primitives
//!   (equality, neighbour generation, goal test, priority).
//! - `heuristics`: Admissible estimates of moves remaining.
//! - `solver`: The A* search driver and `Solution` type.
//! - `utils`: Parsing board configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
