use serde::{Deserialize, Serialize};

use crate::game::{terminal, Cell, Grid, Player};

/// Trait for scoring a board position from one player's point of view.
pub trait Heuristic: Send + Sync {
    fn score(&self, grid: &Grid, player: Player) -> i32;

    /// Signed computer lead: positive when the robot is ahead.
    fn differential(&self, grid: &Grid) -> i32 {
        self.score(grid, Player::Computer)
            .saturating_sub(self.score(grid, Player::Human))
    }
}

/// Points for an open window holding one to four of a player's tokens, plus
/// the per-token bonus for the center column(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowWeights {
    pub one: i32,
    pub two: i32,
    pub three: i32,
    pub four: i32,
    pub center: i32,
}

impl Default for WindowWeights {
    fn default() -> Self {
        WindowWeights {
            one: 1,
            two: 10,
            three: 50,
            four: 100_000,
            center: 3,
        }
    }
}

/// Default heuristic that scans all 4-cell windows and scores the ones the
/// opponent has not blocked.
#[derive(Debug, Clone, Default)]
pub struct WindowHeuristic {
    weights: WindowWeights,
}

impl WindowHeuristic {
    pub fn new(weights: WindowWeights) -> Self {
        WindowHeuristic { weights }
    }

    pub fn weights(&self) -> &WindowWeights {
        &self.weights
    }

    fn score_window(&self, own: usize, opp: usize) -> i32 {
        if opp > 0 {
            return 0;
        }
        match own {
            1 => self.weights.one,
            2 => self.weights.two,
            3 => self.weights.three,
            4 => self.weights.four,
            _ => 0,
        }
    }
}

/// Middle column on odd widths, the middle pair on even widths. Mirrors onto
/// itself, so the bonus is the same for column c and column cols-1-c.
fn is_center_column(cols: usize, col: usize) -> bool {
    col.abs_diff(cols - 1 - col) <= 1
}

impl Heuristic for WindowHeuristic {
    fn score(&self, grid: &Grid, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let mut score: i32 = 0;

        // Center column bonus
        for col in (0..grid.cols()).filter(|&c| is_center_column(grid.cols(), c)) {
            let own = (0..grid.height(col))
                .filter(|&row| grid.get(row, col) == own_cell)
                .count();
            score = score.saturating_add((own as i32).saturating_mul(self.weights.center));
        }

        for window in terminal::windows(grid.rows(), grid.cols()) {
            let mut own = 0;
            let mut opp = 0;
            for &(row, col) in &window {
                match grid.get(row, col) {
                    Cell::Empty => {}
                    c if c == own_cell => own += 1,
                    _ => opp += 1,
                }
            }
            score = score.saturating_add(self.score_window(own, opp));
        }

        score
    }
}

/// Score with the default weights.
pub fn score(grid: &Grid, player: Player) -> i32 {
    WindowHeuristic::default().score(grid, player)
}

/// Computer score minus human score with the default weights.
pub fn differential(grid: &Grid) -> i32 {
    WindowHeuristic::default().differential(grid)
}
