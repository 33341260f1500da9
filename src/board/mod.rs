use std::fmt::{self, Write};

use itertools::Itertools as _;
use thiserror::Error;

pub mod editor;

/// Side length of the grid.
pub const SIZE: usize = 4;

/// A 4x4 grid of tiles. `0` marks an empty cell; every other cell holds a
/// power of two starting at 2. The invariant is checked once at
/// construction; all in-play transforms preserve it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board([[u32; SIZE]; SIZE]);

#[derive(Debug, Error)]
#[error("cell ({row}, {col}) holds {value}; cells must be 0 or a power of two >= 2")]
pub struct InvalidBoard {
    row: usize,
    col: usize,
    value: u32,
}

impl Board {
    pub const EMPTY: Self = Board([[0; SIZE]; SIZE]);

    /// Validates every cell and creates a `Board` from a 2D array.
    ///
    /// # Errors
    /// Returns an `InvalidBoard` error naming the first offending cell if
    /// any value is neither 0 nor a power of two >= 2.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, InvalidBoard> {
        for (row, col) in (0..SIZE).cartesian_product(0..SIZE) {
            let value = rows[row][col];
            if value != 0 && !(value >= 2 && value.is_power_of_two()) {
                return Err(InvalidBoard { row, col, value });
            }
        }

        Ok(Board(rows))
    }

    pub fn to_rows(self) -> [[u32; SIZE]; SIZE] {
        self.0
    }

    /// Rotate the board 90deg clockwise: `out[c][3 - r] = self[r][c]`.
    pub fn rotate_cw(self) -> Self {
        let mut out = [[0; SIZE]; SIZE];

        for (row, col) in (0..SIZE).cartesian_product(0..SIZE) {
            out[col][SIZE - 1 - row] = self.0[row][col];
        }

        Board(out)
    }

    /// Collapse every row toward column 0.
    ///
    /// Returns the collapsed board, the points earned across all four rows,
    /// and whether any cell changed.
    pub fn collapse_left(self) -> (Self, u32, bool) {
        let mut rows = self.0;
        let mut points = 0;
        let mut moved = false;

        for row in rows.iter_mut() {
            let (collapsed, earned) = crate::collapse_row(*row);
            moved |= collapsed != *row;
            points += earned;
            *row = collapsed;
        }

        (Board(rows), points, moved)
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .filter(|&(row, col)| self.0[row][col] == 0)
            .collect()
    }

    /// A board is dead when it has no empty cell and no two equal
    /// neighbours, horizontally or vertically. Runs over the fixed 16
    /// cells; no move lookahead.
    pub fn is_terminal(self) -> bool {
        for (row, col) in (0..SIZE).cartesian_product(0..SIZE) {
            let value = self.0[row][col];

            if value == 0 {
                return false;
            }
            if row + 1 < SIZE && self.0[row + 1][col] == value {
                return false;
            }
            if col + 1 < SIZE && self.0[row][col + 1] == value {
                return false;
            }
        }

        true
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: u32) {
        self.0[row][col] = value;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = self.0.into_iter();

        if let Some(row) = rows.next() {
            row.iter().try_for_each(|c| write!(f, "{c:5}"))?
        }

        for row in rows {
            f.write_char('\n')?;
            row.iter().try_for_each(|c| write!(f, "{c:5}"))?
        }

        Ok(())
    }
}

pub mod test_utils {
    use itertools::Itertools as _;
    use rand::seq::{IndexedRandom as _, SliceRandom as _};

    /// Generate a random valid board holding tiles `2^1..=2^filled` plus
    /// `duplicates` extra copies of already-present values, shuffled over
    /// the 16 cells with the remainder left empty.
    pub fn generate_random_board(filled: u8, duplicates: u8) -> [[u32; 4]; 4] {
        let mut values = (1..=u32::from(filled)).map(|e| 1u32 << e).collect_vec();

        if !values.is_empty() {
            let duplicates = (0..duplicates)
                .map(|_| *values.choose(&mut rand::rng()).unwrap())
                .collect_vec();

            values.extend(duplicates);
        }

        values.resize(16, 0);
        values.shuffle(&mut rand::rng());
        let mut values = values.into_iter();

        use std::array as arr;
        arr::from_fn(|_| arr::from_fn(|_| values.next().unwrap_or(0)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotate_cw() {
        let board = [[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [
            2, 2, 2, 2,
        ]];
        let rotated = [[2, 512, 32, 2], [2, 1024, 64, 4], [2, 2048, 128, 8], [
            2, 4096, 256, 16,
        ]];

        let board = Board::from_rows(board).unwrap();
        let rotated = Board::from_rows(rotated).unwrap();
        assert_eq!(board.rotate_cw(), rotated);
    }

    #[test]
    fn test_rotation_has_order_four() {
        for filled in 0..12 {
            let board = Board::from_rows(test_utils::generate_random_board(filled, 3)).unwrap();

            let full_turn = board.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(full_turn, board);
        }
    }

    #[test]
    fn test_double_rotation_is_half_turn() {
        let rows = test_utils::generate_random_board(10, 4);
        let board = Board::from_rows(rows).unwrap();

        // A 180deg rotation computed independently: reverse the rows, then
        // reverse within each row.
        let mut flipped = rows;
        flipped.reverse();
        flipped.iter_mut().for_each(|row| row.reverse());
        let flipped = Board::from_rows(flipped).unwrap();

        assert_eq!(board.rotate_cw().rotate_cw(), flipped);
    }

    #[test]
    fn test_from_rows_rejects_non_power_of_two() {
        assert!(Board::from_rows([[0, 0, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).is_err());
        assert!(Board::from_rows([[6, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_one() {
        // 1 is a power of two but not a legal tile.
        assert!(Board::from_rows([[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).is_err());
    }

    #[test]
    fn test_from_rows_accepts_valid_tiles() {
        let rows = [[0, 2, 4, 8], [16, 32, 64, 128], [256, 512, 1024, 2048], [0, 0, 0, 0]];
        assert!(Board::from_rows(rows).is_ok());
    }

    #[test]
    fn test_empty_cells() {
        let board =
            Board::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]).unwrap();

        let empty = board.empty_cells();
        assert_eq!(empty.len(), 14);
        assert!(!empty.contains(&(0, 0)));
        assert!(!empty.contains(&(2, 2)));

        assert!(Board::EMPTY.empty_cells().len() == 16);
    }

    #[test]
    fn test_terminal_full_distinct_board() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        assert!(board.is_terminal());
    }

    #[test]
    fn test_non_terminal_with_horizontal_pair() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 4, 8], [4, 2, 8, 2]])
            .unwrap();
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_non_terminal_with_vertical_pair() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 4, 2]])
            .unwrap();
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_non_terminal_with_empty_cell() {
        // Adjacency does not matter while any cell is empty.
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]])
            .unwrap();
        assert!(!board.is_terminal());
        assert!(!Board::EMPTY.is_terminal());
    }
}
