//! # Robo Connect Four
//!
//! Game engine for a Connect Four robot that plays a human and talks trash
//! about it. The engine owns the rules and the robot's move choice; the text
//! it says is produced elsewhere from the [`narration::Snapshot`] and
//! [`narration::Phase`] computed here.
//!
//! ## Modules
//!
//! - [`game`] — Grid with column drops, players, four-in-a-row detection, game state
//! - [`ai`] — Window heuristic and the win / block / best-score move selector
//! - [`narration`] — Snapshot and phase projection for the narration layer
//! - [`engine`] — New game, human move plus robot reply, reset, display payload
//! - [`session`] — Mutex-guarded game for concurrent request handlers
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod narration;
pub mod session;

pub use engine::{Engine, StateView};
pub use session::Session;
