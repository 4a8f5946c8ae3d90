//! One live game guarded for concurrent callers.
//!
//! A request handler may share a [`Session`] across threads. Each operation
//! holds the session lock from validation through the reply, so two moves on
//! the same game never interleave. Separate sessions share nothing but the
//! engine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::engine::{Engine, StateView};
use crate::error::EngineError;
use crate::game::GameState;
use crate::narration::{Phase, Snapshot};

pub struct Session {
    engine: Arc<Engine>,
    state: Mutex<GameState>,
}

impl Session {
    pub fn new(engine: Arc<Engine>) -> Self {
        let state = Mutex::new(engine.new_game());
        Session { engine, state }
    }

    /// Play the human's column and the robot's reply as one step.
    pub fn submit_move(&self, column: usize) -> Result<StateView, EngineError> {
        let mut state = self.lock();
        let next = self.engine.apply_human_move(&state, column)?;
        *state = next;
        Ok(self.engine.view(&state))
    }

    /// Replace the game with a new one.
    pub fn reset(&self) -> StateView {
        let mut state = self.lock();
        *state = self.engine.reset();
        self.engine.view(&state)
    }

    pub fn view(&self) -> StateView {
        self.engine.view(&self.lock())
    }

    pub fn snapshot_and_phase(&self) -> (Snapshot, Phase) {
        self.engine.snapshot_and_phase(&self.lock())
    }

    /// Copy of the current game.
    pub fn state(&self) -> GameState {
        self.lock().clone()
    }

    // The state is only ever replaced whole, so a poisoned lock still guards a
    // consistent game.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
