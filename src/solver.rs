//! A* search driver over the board state space.
//!
//! The driver is a thin consumer of the engine's contract: it pops the
//! lowest-priority board from a frontier, checks `resolved()`, expands
//! `neighbours()`, and deduplicates against a visited set using the
//! content-only board equality. All of the interesting logic lives in
//! [`crate::engine`].
use crate::engine::{Board, Tile, NUM_SLOTS};
use crate::heuristics;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// A heuristic estimate of moves remaining, as consumed by
/// [`solve_astar_with`]. Must be admissible for the solver to return
/// shortest solutions.
pub type Heuristic = fn(&Board) -> u32;

/// A solution found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Boards from the scramble to the solved arrangement, inclusive.
    pub path: Vec<Board>,
    /// Number of moves in the solution; equals `path.len() - 1` and is
    /// optimal (no shorter solution exists).
    pub steps: u32,
    /// Number of states expanded during the search, for comparing
    /// heuristics.
    pub nodes_expanded: u64,
}

/// One frontier entry: a board keyed by its `f = g + h` estimate.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the lowest
/// estimate first. Ties break on insertion order (lower sequence number
/// first), which together with the engine's fixed neighbour order makes
/// search traces reproducible.
struct FrontierEntry {
    estimate: u32,
    seq: u64,
    board: Board,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Solves the puzzle with A* ordered by `Board::priority` (Manhattan
/// distance plus steps taken).
///
/// Returns `None` if the board is unsolvable; otherwise the returned
/// solution is a shortest one.
///
/// # Examples
/// ```
/// use puzzle8_solver::engine::Board;
/// use puzzle8_solver::solver::solve_astar;
///
/// let solution = solve_astar(&Board::shuffled_with_seed(20, 1)).unwrap();
/// assert!(solution.path.last().unwrap().resolved());
/// assert!(solution.steps <= 20);
/// ```
pub fn solve_astar(start: &Board) -> Option<Solution> {
    solve_astar_with(start, heuristics::manhattan)
}

/// Solves the puzzle with A* using the given heuristic for the `h` term.
///
/// The search is identical to [`solve_astar`] apart from the estimate used
/// to order the frontier; an admissible heuristic preserves optimality, a
/// tighter one expands fewer nodes.
pub fn solve_astar_with(start: &Board, heuristic: Heuristic) -> Option<Solution> {
    if !start.is_solvable() {
        return None;
    }

    // Keyed on slot content only, consistent with Board equality: a board
    // reached along a different path is still the same state.
    let mut visited: HashSet<[Option<Tile>; NUM_SLOTS]> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut nodes_expanded: u64 = 0;

    // Search from a fresh root so step_number counts moves from here even if
    // the caller hands us a board that already carries path metadata.
    let root =
        Board::from_slots(*start.slots()).expect("a well-formed board stays well-formed");
    frontier.push(FrontierEntry {
        estimate: heuristic(&root),
        seq,
        board: root,
    });

    while let Some(FrontierEntry { board, .. }) = frontier.pop() {
        if !visited.insert(*board.slots()) {
            continue;
        }

        if board.resolved() {
            return Some(Solution {
                steps: board.step_number(),
                path: reconstruct_path(&board),
                nodes_expanded,
            });
        }

        nodes_expanded += 1;
        for neighbour in board.neighbours() {
            if visited.contains(neighbour.slots()) {
                continue;
            }
            seq += 1;
            frontier.push(FrontierEntry {
                estimate: heuristic(&neighbour) + neighbour.step_number(),
                seq,
                board: neighbour,
            });
        }
    }

    // Unreachable for solvable boards: the reachable half of the state space
    // is finite and contains the goal.
    None
}

/// Walks the parent chain back to the root and returns the boards in
/// root-to-goal order.
fn reconstruct_path(goal: &Board) -> Vec<Board> {
    let mut path = Vec::with_capacity(goal.step_number() as usize + 1);
    let mut current = goal;
    loop {
        path.push(current.clone());
        match current.previous() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn assert_valid_path(start: &Board, solution: &Solution) {
        assert_eq!(solution.path.len() as u32, solution.steps + 1);
        assert_eq!(solution.path[0], *start);
        assert!(solution.path.last().unwrap().resolved());
        // Consecutive boards must differ by exactly one transposition.
        for pair in solution.path.windows(2) {
            let differing = pair[0]
                .slots()
                .iter()
                .zip(pair[1].slots().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
        }
    }

    #[test]
    fn test_solve_already_solved() {
        let solution = solve_astar(&Board::solved()).unwrap();
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.path.len(), 1);
        assert!(solution.path[0].resolved());
    }

    #[test]
    fn test_solve_one_move_scramble() {
        let start = board_from_str_array(&["123", "456", "7.8"]).unwrap();
        let solution = solve_astar(&start).unwrap();
        assert_eq!(solution.steps, 1, "one move from solved must solve in 1");
        assert_valid_path(&start, &solution);
    }

    #[test]
    fn test_solve_two_move_scramble() {
        // Solved, then empty swapped left and up: optimal solution is the
        // exact reverse, length 2.
        let start = board_from_str_array(&["123", "4.6", "758"]).unwrap();
        let solution = solve_astar(&start).unwrap();
        assert_eq!(solution.steps, 2);
        assert_valid_path(&start, &solution);
    }

    #[test]
    fn test_solve_unsolvable_returns_none() {
        let impossible = board_from_str_array(&["213", "456", "78."]).unwrap();
        assert!(solve_astar(&impossible).is_none());
    }

    #[test]
    fn test_solve_seeded_scrambles() {
        for seed in 0..8 {
            let start = Board::shuffled_with_seed(24, seed);
            let solution = solve_astar(&start)
                .unwrap_or_else(|| panic!("scramble with seed {} must be solvable", seed));
            assert!(
                solution.steps <= 24,
                "a 24-move scramble cannot need more than 24 moves"
            );
            assert_valid_path(&start, &solution);
        }
    }

    #[test]
    fn test_heuristics_agree_on_optimal_length() {
        let start = Board::shuffled_with_seed(30, 42);
        let by_manhattan = solve_astar_with(&start, heuristics::manhattan).unwrap();
        let by_misplaced = solve_astar_with(&start, heuristics::misplaced_tiles).unwrap();
        let by_conflict = solve_astar_with(&start, heuristics::linear_conflict).unwrap();

        assert_eq!(by_manhattan.steps, by_misplaced.steps);
        assert_eq!(by_manhattan.steps, by_conflict.steps);
        // The weaker estimate cannot expand fewer nodes than the stronger
        // ones on the same instance.
        assert!(by_manhattan.nodes_expanded <= by_misplaced.nodes_expanded);
    }

    #[test]
    fn test_solver_ignores_callers_path_metadata() {
        // Hand the solver a board that already has a step count: the
        // reported length must still count from the given arrangement.
        let derived = Board::solved().neighbours().into_iter().next().unwrap();
        assert_eq!(derived.step_number(), 1);

        let solution = solve_astar(&derived).unwrap();
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path.len(), 2);
    }
}
