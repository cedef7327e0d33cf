use crate::board::{Board, BLANK, BOARD_SIZE};

/// Goal (row, column) of a numbered tile.
fn goal_position(tile: u8) -> (usize, usize) {
    let idx = tile as usize - 1;
    (idx / BOARD_SIZE, idx % BOARD_SIZE)
}

/// Calculates the sum of Manhattan distances between every tile and its goal cell.
///
/// The blank is not counted. Each move shifts exactly one tile by one cell, so the result
/// is a lower bound on the number of moves needed to reach the goal.
///
/// # Arguments
/// * `board`: A reference to the `Board` to analyze.
///
/// # Returns
/// The total distance as `u32`; `0` exactly when the board is solved.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != BLANK {
                let (gr, gc) = goal_position(tile);
                distance += r.abs_diff(gr) + c.abs_diff(gc);
            }
        }
    }
    distance as u32
}

/// Counts the tiles that are not on their goal cell, ignoring the blank.
///
/// Weaker than `manhattan_distance` but also admissible.
pub fn hamming_distance(board: &Board) -> u32 {
    let mut misplaced = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != BLANK && goal_position(tile) != (r, c) {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Counts pairs of tiles that appear in the wrong relative order when the board is read
/// row by row, skipping the blank.
pub fn count_inversions(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .get_grid()
        .iter()
        .flat_map(|row| row.iter().copied())
        .filter(|&t| t != BLANK)
        .collect();

    tiles
        .iter()
        .enumerate()
        .map(|(i, &t)| tiles[i + 1..].iter().filter(|&&next| next < t).count() as u32)
        .sum()
}

/// Checks whether the goal is reachable from `board`.
///
/// On an odd-width board every move preserves the parity of the inversion count, and the
/// goal has none, so exactly the even-parity boards are solvable.
pub fn is_solvable(board: &Board) -> bool {
    count_inversions(board) % 2 == 0
}
