//! The engine's entry points: start a game, play the human's move together
//! with the robot's reply, and project a game for narration or display.
//!
//! The engine keeps no game of its own. Callers own each [`GameState`] and
//! pass it in; the engine returns the next one.

use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::ai::{MoveSelector, WindowHeuristic};
use crate::config::AppConfig;
use crate::error::{ConfigError, EngineError, MoveError};
use crate::game::{Cell, GameState, Grid, Player};
use crate::narration::{classify, Phase, Snapshot};

/// Everything the front end shows after a request: the board top row first,
/// whose turn it is, and the narration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateView {
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<Vec<Cell>>,
    pub to_move: Player,
    pub snapshot: Snapshot,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: AppConfig,
    selector: MoveSelector<WindowHeuristic>,
}

impl Engine {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_validated(config))
    }

    /// Caller guarantees `config` passed [`AppConfig::validate`].
    fn with_validated(config: AppConfig) -> Self {
        let selector = MoveSelector::new(WindowHeuristic::new(config.heuristic));
        Engine { config, selector }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn selector(&self) -> &MoveSelector<WindowHeuristic> {
        &self.selector
    }

    /// Empty board, human to move, turn index 0.
    pub fn new_game(&self) -> GameState {
        GameState::new(self.config.grid.rows, self.config.grid.cols)
    }

    /// Start over with a brand new game.
    pub fn reset(&self) -> GameState {
        info!("game reset");
        self.new_game()
    }

    /// Wrap a prepared board in a game state scored by this engine.
    pub fn state_from_grid(&self, grid: Grid, to_move: Player) -> GameState {
        GameState::from_grid(grid, to_move, self.selector.heuristic())
    }

    /// Play the human's column and, unless that ended the game, the robot's
    /// reply.
    ///
    /// The input state is never modified. On error nothing was played.
    #[instrument(skip(self, state), fields(turn = state.turn_index()))]
    pub fn apply_human_move(
        &self,
        state: &GameState,
        column: usize,
    ) -> Result<GameState, EngineError> {
        if state.is_terminal() {
            return Err(MoveError::GameAlreadyOver.into());
        }
        if state.to_move() != Player::Human {
            return Err(MoveError::NotHumanTurn.into());
        }

        let heuristic = self.selector.heuristic();
        let mut next = state.clone();
        next.apply_move(column, heuristic)?;
        debug!(column, "human played");

        if !next.is_terminal() {
            let decision = self.selector.decide(next.grid()).map_err(|err| {
                error!(%err, "selector found no move on a live game");
                err
            })?;
            next.apply_move(decision.column, heuristic)?;
            debug!(column = decision.column, reason = ?decision.reason, "computer played");
        }

        if let Some(winner) = next.winner() {
            info!(?winner, plies = next.turn_index(), "game over");
        }

        Ok(next)
    }

    /// Snapshot and phase of a game.
    pub fn snapshot_and_phase(&self, state: &GameState) -> (Snapshot, Phase) {
        classify(state)
    }

    pub fn view(&self, state: &GameState) -> StateView {
        let (snapshot, phase) = classify(state);
        StateView {
            rows: state.grid().rows(),
            cols: state.grid().cols(),
            board: state.grid().rows_top_down(),
            to_move: state.to_move(),
            snapshot,
            phase,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_validated(AppConfig::default())
    }
}
