use serde::{Deserialize, Serialize};

use super::board::Grid;
use super::player::Player;
use super::terminal::{self, Detection};
use crate::ai::Heuristic;
use crate::error::MoveError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Human,
    Computer,
    Draw,
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Winner::Human,
            Player::Computer => Winner::Computer,
        }
    }
}

/// One game session: the board, whose turn it is, the ply count, the result
/// once there is one, and the heuristic score of each side after the latest
/// ply.
///
/// Only [`GameState::apply_move`] advances a game; starting over means
/// building a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    to_move: Player,
    turn_index: usize,
    winner: Option<Winner>,
    human_score: i32,
    computer_score: i32,
}

impl GameState {
    /// Create initial game state. The human always opens.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            grid: Grid::new(rows, cols),
            to_move: Player::Human,
            turn_index: 0,
            winner: None,
            human_score: 0,
            computer_score: 0,
        }
    }

    /// Build a state around a prepared board.
    ///
    /// The turn index is the number of tokens on the board; the result comes
    /// from a full scan since the last move is unknown.
    pub fn from_grid(grid: Grid, to_move: Player, heuristic: &dyn Heuristic) -> Self {
        let winner = match terminal::scan_winner(&grid) {
            Some(player) => Some(Winner::from(player)),
            None if grid.is_full() => Some(Winner::Draw),
            None => None,
        };
        let mut state = GameState {
            turn_index: grid.token_count(),
            grid,
            to_move,
            winner,
            human_score: 0,
            computer_score: 0,
        };
        state.refresh_scores(heuristic);
        state
    }

    /// Get reference to board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose token goes in next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Completed plies so far
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn human_score(&self) -> i32 {
        self.human_score
    }

    pub fn computer_score(&self) -> i32 {
        self.computer_score
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid.legal_columns()
    }

    /// Drop a token for the player to move, then settle the result, hand the
    /// turn over and rescore both sides.
    ///
    /// Every check happens before the board is touched, so an `Err` leaves the
    /// state exactly as it was.
    pub fn apply_move(
        &mut self,
        column: usize,
        heuristic: &dyn Heuristic,
    ) -> Result<Detection, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let (row, col) = self.grid.drop(column, self.to_move)?;

        // Win takes precedence over a draw on the last free cell
        let detection = terminal::check_last_move(&self.grid, row, col);
        if let Detection::Winner(player) = detection {
            self.winner = Some(Winner::from(player));
        } else if terminal::is_draw(&self.grid, detection) {
            self.winner = Some(Winner::Draw);
        }

        self.turn_index += 1;
        self.to_move = self.to_move.other();
        self.refresh_scores(heuristic);

        Ok(detection)
    }

    fn refresh_scores(&mut self, heuristic: &dyn Heuristic) {
        self.human_score = heuristic.score(&self.grid, Player::Human);
        self.computer_score = heuristic.score(&self.grid, Player::Computer);
    }
}

impl Default for GameState {
    fn default() -> Self {
        let grid = Grid::default();
        GameState::new(grid.rows(), grid.cols())
    }
}
