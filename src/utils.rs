use crate::board::{Board, BOARD_SIZE, CELL_COUNT};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from the top, holding `BOARD_SIZE`
/// whitespace-separated tile numbers. `0` stands for the blank.
///
/// # Arguments
/// * `s`: Exactly `BOARD_SIZE` rows.
///
/// # Returns
/// * `Ok(Board)` if every row parses and the tiles form a permutation of `0..=8`.
/// * `Err(String)` if:
///     - The number of rows is not `BOARD_SIZE`.
///     - A row does not hold exactly `BOARD_SIZE` numbers.
///     - A token is not a number.
///     - `Board::from_grid` rejects the tiles (out of range or repeated).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 2 3", "4 0 6", "7 5 8"]).unwrap();
/// assert_eq!(board.get_tile(1, 1), 0);
/// assert_eq!(board.get_tile(2, 1), 5);
///
/// assert!(board_from_str_array(&["1 2 3", "4 0 6"]).is_err());
/// assert!(board_from_str_array(&["1 2 3", "4 x 6", "7 5 8"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() != BOARD_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            BOARD_SIZE,
            s.len()
        ));
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (r, row_str) in s.iter().enumerate() {
        let tokens: Vec<&str> = row_str.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(format!(
                "Row {} has {} values (expected {})",
                r,
                tokens.len(),
                BOARD_SIZE
            ));
        }
        for (c, token) in tokens.iter().enumerate() {
            grid[r][c] = parse_tile(token, r, c)?;
        }
    }

    Board::from_grid(grid)
}

/// Parses a board from free-form text holding nine whitespace-separated numbers in
/// row-major order.
///
/// Line breaks carry no meaning, so `"1 2 3 4 5 6 7 0 8"` and a three-line grid are
/// read the same way.
pub fn board_from_text(text: &str) -> Result<Board, String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != CELL_COUNT {
        return Err(format!(
            "Expected {} numbers, found {}",
            CELL_COUNT,
            tokens.len()
        ));
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (i, token) in tokens.iter().enumerate() {
        let (r, c) = (i / BOARD_SIZE, i % BOARD_SIZE);
        grid[r][c] = parse_tile(token, r, c)?;
    }

    Board::from_grid(grid)
}

fn parse_tile(token: &str, r: usize, c: usize) -> Result<u8, String> {
    token
        .parse::<u8>()
        .map_err(|_| format!("Unrecognized value '{}' in row {} col {}", token, r, c))
}
