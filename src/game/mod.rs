//! Core Connect Four game logic: the column-drop grid, players, four-in-a-row
//! detection and the per-session game state.

mod board;
mod player;
mod state;
pub mod terminal;

pub use board::{Cell, Grid, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameState, Winner};
pub use terminal::{Detection, WIN_LENGTH};
