use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::{GridParseError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Computer => 'C',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'H' | 'h' => Some(Cell::Human),
            'C' | 'c' => Some(Cell::Computer),
            _ => None,
        }
    }
}

/// Column-drop grid. Row 0 is the bottom row.
///
/// Each column keeps its fill height so drops and full-column checks do not
/// scan. Occupied cells in a column are always contiguous from the bottom and
/// their count equals the column height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    /// Parse a picture of the board, top row first.
    ///
    /// `.` is empty, `H` a human token and `C` a computer token; whitespace is
    /// ignored. Tokens floating above an empty cell are rejected.
    pub fn from_rows(picture: &[&str]) -> Result<Self, GridParseError> {
        let parsed = picture
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| Cell::from_symbol(c).ok_or(GridParseError::UnknownSymbol(c)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = parsed.len();
        let cols = parsed.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridParseError::Empty);
        }

        let mut grid = Grid::new(rows, cols);
        for (i, line) in parsed.iter().enumerate() {
            let row = rows - 1 - i;
            if line.len() != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &cell) in line.iter().enumerate() {
                grid.cells[row * cols + col] = cell;
            }
        }

        for col in 0..cols {
            let height = (0..rows)
                .take_while(|&row| grid.get(row, col) != Cell::Empty)
                .count();
            if let Some(row) = (height..rows).find(|&row| grid.get(row, col) != Cell::Empty) {
                return Err(GridParseError::FloatingToken { row, col });
            }
            grid.heights[col] = height;
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`. Use [`Grid::is_column_full`]
    /// or [`Grid::legal_columns`] to screen untrusted columns.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is off a {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Cell lookup with signed coordinates; `None` off the board.
    pub(crate) fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Number of tokens in a column.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.heights[col] == self.rows
    }

    /// Columns that can still take a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a token in a column, returns the (row, col) where it landed
    pub fn drop(&mut self, col: usize, player: Player) -> Result<(usize, usize), MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfRange {
                column: col,
                cols: self.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[row * self.cols + col] = player.to_cell();
        self.heights[col] += 1;
        debug_assert!(self.heights_consistent());

        Ok((row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Total number of tokens on the board
    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// True when every column height matches its occupied cells and those
    /// cells sit contiguously on the bottom.
    pub fn heights_consistent(&self) -> bool {
        (0..self.cols).all(|col| {
            let height = self.heights[col];
            (0..self.rows).all(|row| (self.get(row, col) != Cell::Empty) == (row < height))
        })
    }

    /// Copy of the grid with every Human token turned into a Computer token and
    /// vice versa.
    pub fn with_owners_swapped(&self) -> Grid {
        let cells = self
            .cells
            .iter()
            .map(|&cell| match cell.owner() {
                Some(player) => player.other().to_cell(),
                None => Cell::Empty,
            })
            .collect();
        Grid {
            cells,
            ..self.clone()
        }
    }

    /// Rows from top to bottom, the way the board is displayed
    pub fn rows_top_down(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .rev()
            .map(|row| (0..self.cols).map(|col| self.get(row, col)).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.rows_top_down().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = line.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 7);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                assert_eq!(grid.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(grid.token_count(), 0);
    }

    #[test]
    fn test_drop_stacks_from_bottom() {
        let mut grid = Grid::default();

        assert_eq!(grid.drop(3, Player::Human), Ok((0, 3)));
        assert_eq!(grid.get(0, 3), Cell::Human);

        assert_eq!(grid.drop(3, Player::Computer), Ok((1, 3)));
        assert_eq!(grid.get(1, 3), Cell::Computer);
        assert_eq!(grid.height(3), 2);
        assert!(grid.heights_consistent());
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::default();
        for _ in 0..grid.rows() {
            grid.drop(0, Player::Human).unwrap();
        }

        assert!(grid.is_column_full(0));
        let before = grid.clone();
        assert_eq!(grid.drop(0, Player::Computer), Err(MoveError::ColumnFull(0)));
        assert_eq!(grid, before, "rejected drop must not mutate the grid");
    }

    #[test]
    fn test_column_out_of_range() {
        let mut grid = Grid::default();
        assert_eq!(
            grid.drop(7, Player::Human),
            Err(MoveError::ColumnOutOfRange { column: 7, cols: 7 })
        );
        assert_eq!(grid.token_count(), 0);
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::default();
        for col in 0..grid.cols() {
            assert!(!grid.is_full());
            for _ in 0..grid.rows() {
                grid.drop(col, Player::Computer).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!(grid.legal_columns().is_empty());
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut grid = Grid::new(4, 5);
        for _ in 0..4 {
            grid.drop(2, Player::Human).unwrap();
        }
        assert_eq!(grid.legal_columns(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            "C . . . . . .",
            "C . . . . . .",
            "C . . H H . .",
        ])
        .unwrap();

        assert_eq!(grid.height(0), 3);
        assert_eq!(grid.height(3), 1);
        assert_eq!(grid.get(2, 0), Cell::Computer);
        assert_eq!(grid.get(0, 4), Cell::Human);
        assert!(grid.heights_consistent());
    }

    #[test]
    fn test_from_rows_rejects_floating_token() {
        let err = Grid::from_rows(&["....", "H...", "....", "...."]).unwrap_err();
        assert_eq!(err, GridParseError::FloatingToken { row: 2, col: 0 });
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(Grid::from_rows(&[]), Err(GridParseError::Empty));
        assert_eq!(
            Grid::from_rows(&["..x."]),
            Err(GridParseError::UnknownSymbol('x'))
        );
        assert!(matches!(
            Grid::from_rows(&["....", "..."]),
            Err(GridParseError::RaggedRow { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_rows() {
        let mut grid = Grid::default();
        grid.drop(3, Player::Human).unwrap();
        grid.drop(3, Player::Computer).unwrap();
        grid.drop(0, Player::Human).unwrap();

        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.last(), Some(&"H . . H . . ."));
        assert_eq!(Grid::from_rows(&lines).unwrap(), grid);
    }

    #[test]
    fn test_owners_swapped() {
        let mut grid = Grid::default();
        grid.drop(1, Player::Human).unwrap();
        grid.drop(1, Player::Computer).unwrap();

        let swapped = grid.with_owners_swapped();
        assert_eq!(swapped.get(0, 1), Cell::Computer);
        assert_eq!(swapped.get(1, 1), Cell::Human);
        assert_eq!(swapped.height(1), 2);
        assert_eq!(swapped.with_owners_swapped(), grid);
    }

    #[test]
    #[should_panic(expected = "off a 6x7 grid")]
    fn test_get_off_board_column_panics() {
        // Column 7 would otherwise alias the first cell of the next row
        Grid::default().get(0, 7);
    }

    #[test]
    #[should_panic]
    fn test_height_off_board_column_panics() {
        Grid::default().height(7);
    }
}
