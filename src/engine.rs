//! Core state-space model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: An immutable numbered puzzle piece, identified by its home index.
//! - `Board`: One complete arrangement of tiles and the empty slot, plus the
//!   path metadata (`step_number`, parent back-reference) needed by an
//!   informed best-first search.
//! - `Game`: Manages a single long-lived interactive board, including move
//!   count and history (for undo).
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Width and height of the puzzle grid. The board is always square.
pub const GRID_SIZE: usize = 3;

/// Total number of slots on the board, including the single empty slot.
pub const NUM_SLOTS: usize = GRID_SIZE * GRID_SIZE;

/// Number of moves used by the default scramble constructors.
pub const DEFAULT_SHUFFLE_MOVES: usize = 64;

/// Direction offsets tried by `neighbours`, in fixed order:
/// left, right, up, down. The order only affects tie-breaking in the
/// downstream search, not correctness.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An immutable numbered puzzle piece.
///
/// A tile's identity is fully determined by its *home index*: the flattened
/// position it occupies when the puzzle is solved. Two tiles with equal home
/// index are interchangeable.
///
/// # Examples
/// ```
/// use puzzle8_solver::engine::Tile;
/// let tile = Tile::new(5);
/// assert_eq!(tile.number(), 5);
/// assert_eq!(tile, Tile::new(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile(u8);

impl Tile {
    /// Creates a tile with the given home index.
    ///
    /// Valid home indices are `0..NUM_SLOTS - 1`; `Board::from_slots` is
    /// where that range is enforced.
    pub fn new(home_index: u8) -> Self {
        Tile(home_index)
    }

    /// Returns the home index: the slot this tile belongs to when solved.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tile {
    /// Tiles print as `1..=8`, the conventional face labels (home index + 1).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Errors from constructing a `Board` out of raw slot content.
///
/// These all indicate malformed input, never a recoverable runtime
/// condition: a well-formed board cannot produce them through any sequence
/// of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The content did not have exactly one empty slot.
    EmptyCount(usize),
    /// A tile's home index was outside `0..NUM_SLOTS - 1`.
    TileOutOfRange(u8),
    /// The same home index appeared in more than one slot.
    DuplicateTile(u8),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyCount(n) => {
                write!(f, "expected exactly 1 empty slot, found {}", n)
            }
            BoardError::TileOutOfRange(t) => {
                write!(f, "tile home index {} out of range 0..{}", t, NUM_SLOTS - 1)
            }
            BoardError::DuplicateTile(t) => {
                write!(f, "tile home index {} appears more than once", t)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// One complete arrangement of tiles and the empty slot on the 3x3 grid.
///
/// Slots are stored row-major; exactly one slot is empty (`None`) at all
/// times. A board also carries its depth in the search tree (`step_number`)
/// and an optional back-reference to the board it was derived from, which
/// lets a search driver reconstruct the solution path once a resolved board
/// is found.
///
/// Boards are never mutated after construction, with one sanctioned
/// exception: the single interactive board a user manipulates through
/// [`Game`], which applies moves in place via [`Board::try_moving`].
///
/// # Equality
/// Two boards are equal iff their slot contents are equal element-wise.
/// `step_number` and `previous` are deliberately excluded, so that a visited
/// set deduplicates states reached along different paths. Hashing is
/// consistent with this: it covers the slots only.
#[derive(Clone, Debug)]
pub struct Board {
    slots: [Option<Tile>; NUM_SLOTS],
    step_number: u32,
    previous: Option<Rc<Board>>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}

impl Board {
    /// Creates the canonical solved board: tile `k` at slot `k` for every
    /// `k` in `0..8`, empty slot last.
    ///
    /// # Examples
    /// ```
    /// use puzzle8_solver::engine::Board;
    /// let board = Board::solved();
    /// assert!(board.resolved());
    /// assert_eq!(board.priority(), 0);
    /// ```
    pub fn solved() -> Self {
        let mut slots = [None; NUM_SLOTS];
        for (k, slot) in slots.iter_mut().take(NUM_SLOTS - 1).enumerate() {
            *slot = Some(Tile::new(k as u8));
        }
        Board {
            slots,
            step_number: 0,
            previous: None,
        }
    }

    /// Builds a root board from raw slot content in row-major order.
    ///
    /// Validates the structural invariants: exactly one empty slot, every
    /// tile's home index in range, no duplicates. The resulting board has
    /// `step_number` 0 and no parent.
    ///
    /// # Errors
    /// Returns a [`BoardError`] describing the first violated invariant.
    pub fn from_slots(slots: [Option<Tile>; NUM_SLOTS]) -> Result<Self, BoardError> {
        let empty_count = slots.iter().filter(|s| s.is_none()).count();
        if empty_count != 1 {
            return Err(BoardError::EmptyCount(empty_count));
        }
        let mut seen = [false; NUM_SLOTS - 1];
        for tile in slots.iter().flatten() {
            let home = tile.number();
            if home as usize >= NUM_SLOTS - 1 {
                return Err(BoardError::TileOutOfRange(home));
            }
            if seen[home as usize] {
                return Err(BoardError::DuplicateTile(home));
            }
            seen[home as usize] = true;
        }
        Ok(Board {
            slots,
            step_number: 0,
            previous: None,
        })
    }

    /// Creates a scrambled board by applying random legal moves to the
    /// solved board.
    ///
    /// Uses a fixed internal seed so repeated calls are deterministic; use
    /// [`Board::shuffled_with_seed`] for other scrambles. Scrambling by
    /// legal moves guarantees the result is solvable.
    pub fn shuffled(move_count: usize) -> Self {
        Self::shuffled_with_seed(move_count, 514514)
    }

    /// Creates a scrambled board by applying `move_count` random legal moves
    /// to the solved board, seeded for reproducibility.
    ///
    /// The scramble never immediately undoes its previous move, so short
    /// scrambles still wander away from the goal. The same seed always
    /// produces the same board.
    pub fn shuffled_with_seed(move_count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::solved();
        // The slot the empty just vacated; swapping back would undo the move.
        let mut came_from: Option<usize> = None;

        for _ in 0..move_count {
            let empty = board.empty_index();
            let (ex, ey) = (empty % GRID_SIZE, empty / GRID_SIZE);
            let candidates: Vec<usize> = NEIGHBOUR_OFFSETS
                .iter()
                .filter_map(|&(dx, dy)| in_bounds(ex, ey, dx, dy))
                .filter(|&idx| Some(idx) != came_from)
                .collect();
            let &target = candidates
                .choose(&mut rng)
                .expect("empty slot always has at least one legal move");
            board.slots.swap(empty, target);
            came_from = Some(empty);
        }
        board
    }

    /// Internal constructor for `neighbours`: a content clone of the parent
    /// with `previous` pointing back at it and the step count advanced.
    fn derived(parent: &Rc<Board>) -> Board {
        Board {
            slots: parent.slots,
            step_number: parent.step_number + 1,
            previous: Some(Rc::clone(parent)),
        }
    }

    /// Snapshot of `self` shared as the parent of all boards one move away.
    fn as_parent(&self) -> Rc<Board> {
        Rc::new(self.clone())
    }

    /// Returns the slot contents in row-major order.
    pub fn slots(&self) -> &[Option<Tile>; NUM_SLOTS] {
        &self.slots
    }

    /// Returns the number of moves from the root board to this one.
    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    /// Returns the board this one was derived from, if any.
    pub fn previous(&self) -> Option<&Board> {
        self.previous.as_deref()
    }

    /// Returns true iff every tile sits on its home slot.
    ///
    /// Only the first `NUM_SLOTS - 1` slots are checked; once all tiles are
    /// home the empty slot is forced to the last position by pigeonhole.
    pub fn resolved(&self) -> bool {
        (0..NUM_SLOTS - 1).all(|i| self.slots[i].is_some_and(|t| t.number() as usize == i))
    }

    /// Flattened index of the single empty slot.
    fn empty_index(&self) -> usize {
        self.slots
            .iter()
            .position(|s| s.is_none())
            .expect("board invariant: exactly one empty slot")
    }

    /// Generates every board reachable from this one by a single move.
    ///
    /// The empty slot is swapped with each in-bounds orthogonal neighbour,
    /// tried in the fixed order left, right, up, down. Each result is a new
    /// board with `previous` set to a shared snapshot of `self` and
    /// `step_number + 1`. A 3x3 board yields 2 (corner), 3 (edge) or 4
    /// (center) neighbours.
    pub fn neighbours(&self) -> Vec<Board> {
        let empty = self.empty_index();
        let (ex, ey) = (empty % GRID_SIZE, empty / GRID_SIZE);
        let parent = self.as_parent();

        let mut boards = Vec::with_capacity(4);
        for &(dx, dy) in &NEIGHBOUR_OFFSETS {
            if let Some(target) = in_bounds(ex, ey, dx, dy) {
                let mut board = Board::derived(&parent);
                board.slots.swap(empty, target);
                boards.push(board);
            }
        }
        boards
    }

    /// A* priority: `f = g + h`, with `g` the moves taken so far
    /// (`step_number`) and `h` the Manhattan-distance heuristic.
    ///
    /// Lower values are explored first. Manhattan distance never
    /// overestimates the true remaining distance (each move changes one
    /// tile's distance by at most 1), so a best-first driver ordering on
    /// this value finds shortest solutions.
    pub fn priority(&self) -> u32 {
        self.manhattan_distance() + self.step_number
    }

    /// Sum over all tiles of the grid distance between their current slot
    /// and their home slot.
    pub fn manhattan_distance(&self) -> u32 {
        let mut distance = 0;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(tile) = slot {
                let home = tile.number() as usize;
                let (home_x, home_y) = (home % GRID_SIZE, home / GRID_SIZE);
                let (cur_x, cur_y) = (i % GRID_SIZE, i / GRID_SIZE);
                distance += cur_x.abs_diff(home_x) + cur_y.abs_diff(home_y);
            }
        }
        distance as u32
    }

    /// Whether this arrangement can reach the solved board at all.
    ///
    /// For an odd grid width the board is solvable iff the number of
    /// inversions among the tiles (pairs out of home order, empty slot
    /// ignored) is even. A board one transposition away from solved is the
    /// classic unsolvable example.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.slots.iter().flatten().map(|t| t.number()).collect();
        let inversions: usize = tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| tiles[i + 1..].iter().filter(|&&u| u < t).count())
            .sum();
        inversions % 2 == 0
    }

    /// Enumerates `(tile-or-empty, column, row)` triples in row-major order,
    /// for a rendering layer to draw.
    pub fn cells(&self) -> impl Iterator<Item = (Option<Tile>, usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &slot)| (slot, i % GRID_SIZE, i / GRID_SIZE))
    }

    /// Attempts to slide the tile at `(column, row)` into the empty slot,
    /// in place.
    ///
    /// Returns true and applies the swap iff the addressed cell holds a tile
    /// orthogonally adjacent to the empty slot. This is the interactive-play
    /// entry point used by [`Game`]; search never mutates boards.
    pub fn try_moving(&mut self, column: usize, row: usize) -> bool {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return false;
        }
        let clicked = xy_to_index(column, row);
        if self.slots[clicked].is_none() {
            return false;
        }
        for &(dx, dy) in &NEIGHBOUR_OFFSETS {
            if let Some(adjacent) = in_bounds(column, row, dx, dy) {
                if self.slots[adjacent].is_none() {
                    self.slots.swap(clicked, adjacent);
                    return true;
                }
            }
        }
        false
    }
}

/// Converts grid coordinates to a flattened slot index.
fn xy_to_index(x: usize, y: usize) -> usize {
    x + y * GRID_SIZE
}

/// Applies a direction offset to `(x, y)`, returning the flattened index of
/// the target cell if it lies on the grid.
///
/// This is the only bounds check in the system; an off-by-one here would
/// silently corrupt the search space.
fn in_bounds(x: usize, y: usize, dx: isize, dy: isize) -> Option<usize> {
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    if nx >= 0 && nx < GRID_SIZE as isize && ny >= 0 && ny < GRID_SIZE as isize {
        Some(xy_to_index(nx as usize, ny as usize))
    } else {
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, column, _row) in self.cells() {
            match slot {
                Some(tile) => write!(f, "{}", tile)?,
                None => write!(f, ".")?,
            }
            if column == GRID_SIZE - 1 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Manages one interactive puzzle session.
///
/// Unlike the many transient boards produced during search, a `Game` owns a
/// single long-lived board that is mutated in place as the player slides
/// tiles. It tracks the move count and keeps a history of board states so
/// moves can be undone.
///
/// # Examples
/// ```
/// use puzzle8_solver::engine::{Board, Game};
/// let mut game = Game::new_with_board(Board::shuffled_with_seed(16, 7));
/// assert_eq!(game.moves(), 0);
/// if game.process_move(1, 1) {
///     assert_eq!(game.moves(), 1);
///     assert!(game.undo_last_move());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    moves: u32,
    history: Vec<Board>,
}

impl Game {
    /// Creates a game with the default deterministic scramble.
    pub fn new() -> Self {
        Self::new_with_board(Board::shuffled(DEFAULT_SHUFFLE_MOVES))
    }

    /// Creates a game starting from the given board.
    pub fn new_with_board(board: Board) -> Self {
        Game {
            board: board.clone(),
            moves: 0,
            history: vec![board],
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of moves made so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Attempts to slide the tile at `(column, row)` into the empty slot.
    ///
    /// On success the move count is incremented and the new state is pushed
    /// onto the history for undo. Returns false if the cell is out of
    /// bounds, empty, or not adjacent to the empty slot.
    pub fn process_move(&mut self, column: usize, row: usize) -> bool {
        if !self.board.try_moving(column, row) {
            return false;
        }
        self.moves += 1;
        self.history.push(self.board.clone());
        true
    }

    /// Undoes the last move, restoring the previous board state.
    ///
    /// Returns false if no moves have been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            self.board = self
                .history
                .last()
                .expect("history always retains the initial state")
                .clone();
            self.moves -= 1;
            true
        } else {
            false
        }
    }

    /// Returns true once every tile is back on its home slot.
    pub fn is_won(&self) -> bool {
        self.board.resolved()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
