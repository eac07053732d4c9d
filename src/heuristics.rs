//! Heuristic cost estimates for ordering the search.
//!
//! Every function here is admissible: it never overestimates the true number
//! of moves remaining, which is what lets the A* driver in [`crate::solver`]
//! guarantee shortest solutions. They differ only in how tight the estimate
//! is, and therefore in how many nodes the search expands.
use crate::engine::{Board, GRID_SIZE};

/// Sum of grid distances between each tile's current and home position.
///
/// This is the estimate `Board::priority` is built on. Each move changes one
/// tile's distance by exactly 1, so the total is a lower bound on the moves
/// remaining.
pub fn manhattan(board: &Board) -> u32 {
    board.manhattan_distance()
}

/// Number of tiles not currently on their home slot.
///
/// Weaker than Manhattan distance (each move re-homes at most one tile), but
/// still admissible. Useful as a baseline in the heuristic evaluator.
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .cells()
        .filter(|&(slot, column, row)| {
            slot.is_some_and(|t| t.number() as usize != column + row * GRID_SIZE)
        })
        .count() as u32
}

/// Manhattan distance plus a linear-conflict penalty.
///
/// Two tiles in their home row (or column) that must pass each other to
/// reach their home slots cost at least two extra moves, on top of what
/// Manhattan distance accounts for. Dominates plain Manhattan distance while
/// remaining admissible.
pub fn linear_conflict(board: &Board) -> u32 {
    let slots = board.slots();
    let mut conflicts = 0;

    // Row conflicts: tiles whose home row is the row they sit in, appearing
    // out of home order.
    for row in 0..GRID_SIZE {
        let mut max_seen: Option<u8> = None;
        for column in 0..GRID_SIZE {
            if let Some(tile) = slots[column + row * GRID_SIZE] {
                if tile.number() as usize / GRID_SIZE == row {
                    match max_seen {
                        Some(m) if tile.number() < m => conflicts += 1,
                        _ => max_seen = Some(tile.number()),
                    }
                }
            }
        }
    }

    // Column conflicts, symmetric over home columns.
    for column in 0..GRID_SIZE {
        let mut max_seen: Option<u8> = None;
        for row in 0..GRID_SIZE {
            if let Some(tile) = slots[column + row * GRID_SIZE] {
                if tile.number() as usize % GRID_SIZE == column {
                    match max_seen {
                        Some(m) if tile.number() < m => conflicts += 1,
                        _ => max_seen = Some(tile.number()),
                    }
                }
            }
        }
    }

    board.manhattan_distance() + 2 * conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_all_heuristics_zero_on_goal() {
        let goal = Board::solved();
        assert_eq!(manhattan(&goal), 0);
        assert_eq!(misplaced_tiles(&goal), 0);
        assert_eq!(linear_conflict(&goal), 0);
    }

    #[test]
    fn test_one_move_board() {
        let board = board_from_str_array(&["123", "456", "7.8"]).unwrap();
        assert_eq!(manhattan(&board), 1);
        assert_eq!(misplaced_tiles(&board), 1);
        assert_eq!(linear_conflict(&board), 1);
    }

    #[test]
    fn test_misplaced_counts_tiles_not_distance() {
        // Tile 1 is two slots from home but counts once.
        let board = board_from_str_array(&["231", "456", "78."]).unwrap();
        assert_eq!(misplaced_tiles(&board), 3);
        assert_eq!(manhattan(&board), 4);
    }

    #[test]
    fn test_linear_conflict_adds_two_per_conflict() {
        // Tiles 1 and 2 are both in their home row but reversed: one
        // conflict on top of Manhattan distance 2.
        let board = board_from_str_array(&["213", "456", "78."]).unwrap();
        assert_eq!(manhattan(&board), 2);
        assert_eq!(linear_conflict(&board), 4);
    }

    #[test]
    fn test_manhattan_dominated_by_linear_conflict() {
        for seed in 0..10 {
            let board = Board::shuffled_with_seed(40, seed);
            assert!(misplaced_tiles(&board) <= manhattan(&board));
            assert!(manhattan(&board) <= linear_conflict(&board));
        }
    }
}
