//! Four-in-a-row detection.
//!
//! [`check_last_move`] only walks the four lines through the newest token;
//! [`scan_winner`] checks every window on the board and exists to cross-check
//! it and to classify boards built outside of normal play.

use super::board::{Cell, Grid};
use super::player::Player;

/// Tokens in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// (row step, col step) for horizontal, vertical, diagonal ↗ and diagonal ↘.
/// Row 0 is the bottom, so ↗ climbs rows while moving right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    NoWinner,
    Winner(Player),
}

impl Detection {
    pub fn winner(self) -> Option<Player> {
        match self {
            Detection::NoWinner => None,
            Detection::Winner(player) => Some(player),
        }
    }
}

/// Check if the token at (row, col) completed a run of four or more.
pub fn check_last_move(grid: &Grid, row: usize, col: usize) -> Detection {
    let Some(player) = grid.get(row, col).owner() else {
        return Detection::NoWinner;
    };
    let cell = player.to_cell();

    let won = DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = 1
            + count_run(grid, row, col, dr, dc, cell)
            + count_run(grid, row, col, -dr, -dc, cell);
        run >= WIN_LENGTH
    });

    if won {
        Detection::Winner(player)
    } else {
        Detection::NoWinner
    }
}

/// Matching cells walking away from (row, col), not counting the start.
fn count_run(grid: &Grid, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while grid.cell_at(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Exhaustive scan of every window. Returns the owner of the first complete
/// window found.
pub fn scan_winner(grid: &Grid) -> Option<Player> {
    windows(grid.rows(), grid.cols()).find_map(|window| {
        let (r0, c0) = window[0];
        let owner = grid.get(r0, c0).owner()?;
        window
            .iter()
            .all(|&(r, c)| grid.get(r, c) == owner.to_cell())
            .then_some(owner)
    })
}

/// A full board is a draw only when the last placement did not win.
pub fn is_draw(grid: &Grid, last: Detection) -> bool {
    grid.is_full() && last == Detection::NoWinner
}

/// Every contiguous run of [`WIN_LENGTH`] cells along the four directions,
/// as (row, col) coordinates.
pub fn windows(rows: usize, cols: usize) -> impl Iterator<Item = [(usize, usize); WIN_LENGTH]> {
    let span = WIN_LENGTH as isize - 1;
    DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
        (0..rows).flat_map(move |row| {
            (0..cols).filter_map(move |col| {
                let end_r = row as isize + dr * span;
                let end_c = col as isize + dc * span;
                if end_r < 0 || end_r >= rows as isize || end_c >= cols as isize {
                    return None;
                }
                Some(std::array::from_fn(|i| {
                    let i = i as isize;
                    (
                        (row as isize + dr * i) as usize,
                        (col as isize + dc * i) as usize,
                    )
                }))
            })
        })
    })
}
