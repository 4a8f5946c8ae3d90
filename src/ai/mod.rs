//! The computer opponent: board evaluation and move selection.

mod heuristic;
mod selector;

pub use heuristic::{differential, score, Heuristic, WindowHeuristic, WindowWeights};
pub use selector::{Decision, MoveSelector, Reason};
