//! GUI module for the Othello game
//!
//! This module provides a native Rust GUI using egui/eframe: a settings
//! screen, the board with legal-move hints, and a side panel with scores and
//! the match tally. The computer opponent searches on a background thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OthelloApp;
pub use game_state::{GameMode, GameState, Settings, Tally};
