//! Othello (Reversi) engine with a heuristic computer player
//!
//! Rules implemented:
//! - Square boards of even size from 4x4 to 26x26 (8x8 by default)
//! - Black moves first from the usual four-piece center
//! - A move must capture: every straight run of opponent pieces closed off
//!   by the mover is flipped
//! - A side without a legal move passes; the game ends when neither can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Slots, per-color direction caches and the frontier
//! - [`rules`]: Legal move discovery, move execution and undo
//! - [`eval`]: Corner / piece / mobility heuristic
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: The `Othello` facade integrating all components
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{Color, Othello};
//!
//! let mut game = Othello::with_callback(8, |change| {
//!     println!("{} now holds {}", change.color, change.pos);
//! });
//!
//! // Human plays Black at row 3, column 4 (1-based)
//! assert!(game.execute_move(Color::Black, 3, 4));
//!
//! // Computer answers as White
//! if game.has_legal_move(Color::White) {
//!     game.auto_move(Color::White);
//! }
//! println!("{game}");
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, Cell, Color, ConfigError, Pos, DEFAULT_BOARD_SIZE};
pub use engine::{Othello, Outcome, SlotCallback};
pub use rules::{MoveError, Position, SlotChange};
pub use search::{SearchResult, Searcher};
