use tracing::debug;

use crate::error::SelectError;
use crate::game::{terminal, Detection, Grid, Player};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Why the selector picked a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The drop wins on the spot.
    Win,
    /// The human would win there next.
    Block,
    /// Best post-drop score for the computer.
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub reason: Reason,
}

/// Picks the computer's column with a fixed priority: an immediate win, then a
/// block of the human's immediate win, then the highest heuristic score after
/// the drop. Ties go to the leftmost column.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector<H = WindowHeuristic> {
    heuristic: H,
}

impl<H: Heuristic> MoveSelector<H> {
    pub fn new(heuristic: H) -> Self {
        MoveSelector { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Column the computer should play.
    pub fn choose_column(&self, grid: &Grid) -> Result<usize, SelectError> {
        self.decide(grid).map(|decision| decision.column)
    }

    /// Column the computer should play, with the rule that selected it.
    pub fn decide(&self, grid: &Grid) -> Result<Decision, SelectError> {
        let legal = grid.legal_columns();
        if legal.is_empty() {
            return Err(SelectError::NoLegalMove);
        }

        if let Some(&column) = legal
            .iter()
            .find(|&&col| wins_after_drop(grid, col, Player::Computer))
        {
            debug!(column, "taking immediate win");
            return Ok(Decision {
                column,
                reason: Reason::Win,
            });
        }

        let blocks: Vec<usize> = legal
            .iter()
            .copied()
            .filter(|&col| wins_after_drop(grid, col, Player::Human))
            .collect();

        let (candidates, reason) = if blocks.is_empty() {
            (legal, Reason::Heuristic)
        } else {
            (blocks, Reason::Block)
        };

        let mut best_column = candidates[0];
        let mut best_score = i32::MIN;
        for &col in &candidates {
            let mut next = grid.clone();
            if next.drop(col, Player::Computer).is_err() {
                continue;
            }
            let score = self.heuristic.score(&next, Player::Computer);
            // Strict comparison keeps the leftmost column on ties
            if score > best_score {
                best_score = score;
                best_column = col;
            }
        }

        debug!(column = best_column, score = best_score, ?reason, "selected column");
        Ok(Decision {
            column: best_column,
            reason,
        })
    }
}

/// Would `player` win by dropping into `col`?
fn wins_after_drop(grid: &Grid, col: usize, player: Player) -> bool {
    let mut next = grid.clone();
    match next.drop(col, player) {
        Ok((row, col)) => terminal::check_last_move(&next, row, col) == Detection::Winner(player),
        Err(_) => false,
    }
}
