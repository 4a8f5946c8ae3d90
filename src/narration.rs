//! Read-only projection of a game for the narration layer.
//!
//! The robot's banter is produced elsewhere; it only ever sees a [`Snapshot`]
//! and the [`Phase`] of the game, both recomputed from the [`GameState`] on
//! every call.

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Winner};

/// Numeric summary of a game at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn_index: usize,
    pub computer_score: i32,
    pub human_score: i32,
    /// Computer score minus human score.
    pub differential: i32,
    pub terminal: bool,
    pub winner: Option<Winner>,
}

/// Narration stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Midgame,
    ComputerWins,
    HumanWins,
    Draw,
}

impl Phase {
    /// Phase of a game. Checked in order: no plies yet, still running, then
    /// the result.
    pub fn of(state: &GameState) -> Phase {
        if state.turn_index() == 0 {
            return Phase::Intro;
        }
        match state.winner() {
            None => Phase::Midgame,
            Some(Winner::Computer) => Phase::ComputerWins,
            Some(Winner::Human) => Phase::HumanWins,
            Some(Winner::Draw) => Phase::Draw,
        }
    }
}

impl Snapshot {
    pub fn of(state: &GameState) -> Snapshot {
        Snapshot {
            turn_index: state.turn_index(),
            computer_score: state.computer_score(),
            human_score: state.human_score(),
            differential: state.computer_score() - state.human_score(),
            terminal: state.is_terminal(),
            winner: state.winner(),
        }
    }
}

/// Snapshot and phase of a game, without touching it.
pub fn classify(state: &GameState) -> (Snapshot, Phase) {
    (Snapshot::of(state), Phase::of(state))
}
