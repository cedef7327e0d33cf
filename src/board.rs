//! Board representation for the 3×3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank can travel.
//! - `Board`: An immutable snapshot of one tile arrangement, including the blank
//!   position and the tile that was moved to produce it. It provides the goal test,
//!   the Manhattan distance estimate and successor generation used by the solver.
use crate::heuristics;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Width and height of the board. The puzzle is always 3×3.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The value used for the blank cell.
pub const BLANK: u8 = 0;

/// The solved arrangement: tiles in ascending order with the blank last.
pub const GOAL_GRID: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// A direction in which the blank travels.
///
/// Moving the blank `Up` slides the tile above it down into the blank's old cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset applied to the blank position.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// One configuration of the puzzle.
///
/// Boards are small `Copy` values and are never mutated once built; moving the blank
/// produces a new board. Equality and hashing only consider the tile layout, so two
/// boards reached through different moves compare equal when their tiles match.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: (usize, usize),
    /// Tile that slid into the previous blank cell to produce this board, `BLANK` for
    /// an initial configuration.
    moved_tile: u8,
}

impl Board {
    /// Creates the solved board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::board::Board;
    /// let board = Board::goal();
    /// assert!(board.is_goal());
    /// assert_eq!(board.get_tile(2, 2), 0);
    /// ```
    pub fn goal() -> Self {
        Board {
            grid: GOAL_GRID,
            blank: (BOARD_SIZE - 1, BOARD_SIZE - 1),
            moved_tile: BLANK,
        }
    }

    /// Creates a board from a grid of tile numbers, `0` standing for the blank.
    ///
    /// The grid must contain every value in `0..=8` exactly once. Parity is not checked:
    /// an unreachable arrangement is accepted and simply never reaches the goal.
    ///
    /// # Returns
    /// * `Ok(Board)` for a valid permutation, with no moved tile recorded.
    /// * `Err(String)` if a value is out of range or appears more than once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::board::Board;
    /// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
    /// assert_eq!(board.blank_position(), (2, 1));
    /// assert!(Board::from_grid([[1, 1, 3], [4, 5, 6], [7, 0, 8]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, String> {
        let mut seen = [false; CELL_COUNT];
        let mut blank = None;

        for (r, row) in grid.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                let idx = tile as usize;
                if idx >= CELL_COUNT {
                    return Err(format!(
                        "Tile {} at row {} col {} is out of range (expected 0..={})",
                        tile,
                        r,
                        c,
                        CELL_COUNT - 1
                    ));
                }
                if seen[idx] {
                    return Err(format!("Tile {} appears more than once", tile));
                }
                seen[idx] = true;
                if tile == BLANK {
                    blank = Some((r, c));
                }
            }
        }

        // Nine distinct values below nine always include the blank.
        let blank = blank.ok_or_else(|| "Board has no blank cell".to_string())?;
        Ok(Board {
            grid,
            blank,
            moved_tile: BLANK,
        })
    }

    /// Creates a board by walking the blank `steps` random moves away from the goal.
    ///
    /// The walk never immediately undoes its previous move, and the same `seed` always
    /// produces the same board. The result is always solvable in at most `steps` moves
    /// and is returned as an initial configuration (no moved tile recorded).
    pub fn new_scrambled_with_seed(steps: u32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<Move> = Move::ALL
                .iter()
                .copied()
                .filter(|m| last.map_or(true, |l| *m != l.opposite()))
                .filter(|m| board.apply_move(*m).is_some())
                .collect();
            // Every cell has at least two legal moves, so one always survives the filter.
            if let Some(&mv) = candidates.choose(&mut rng) {
                if let Some(next) = board.apply_move(mv) {
                    board = next;
                    last = Some(mv);
                }
            }
        }

        board.moved_tile = BLANK;
        board
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn get_grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    /// The tile moved to produce this board, or `BLANK` for an initial configuration.
    pub fn moved_tile(&self) -> u8 {
        self.moved_tile
    }

    /// Checks whether the tiles are in the solved arrangement.
    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// Sum of the Manhattan distances of every tile to its goal cell.
    ///
    /// This never overestimates the number of moves left, which is what A* relies on.
    pub fn manhattan(&self) -> u32 {
        heuristics::manhattan_distance(self)
    }

    /// Moves the blank one cell in the given direction.
    ///
    /// # Returns
    /// * `Some(Board)` with the tile swapped into the old blank cell recorded as the
    ///   moved tile.
    /// * `None` if the move would take the blank off the board.
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.as_offset();
        let nr = self.blank.0 as isize + dr;
        let nc = self.blank.1 as isize + dc;
        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return None;
        }

        let (nr, nc) = (nr as usize, nc as usize);
        let mut grid = self.grid;
        let tile = grid[nr][nc];
        grid[self.blank.0][self.blank.1] = tile;
        grid[nr][nc] = BLANK;

        Some(Board {
            grid,
            blank: (nr, nc),
            moved_tile: tile,
        })
    }

    /// All configurations reachable with one legal move, in `Move::ALL` order.
    ///
    /// A corner blank yields two boards, an edge blank three and the centre four.
    pub fn neighbors(&self) -> Vec<Board> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply_move(mv))
            .collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows, the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{:>2}", tile)?;
                }
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
