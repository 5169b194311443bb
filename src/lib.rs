//! Click-driven tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **game**: the board, the 8 winning lines, and the move-application
//!   state machine — pure data and rules, no rendering.
//! - **opponent**: a fixed priority chain of four heuristics (win,
//!   block, center, first open square). Deterministic, always
//!   terminating, provably beatable.
//! - **controller**: routes window-space clicks to board cells, runs
//!   the opponent once per tick, and snapshots a render model.
//! - **display / tui**: the seam to the frontend and a ratatui
//!   implementation of it. The core never owns window handles.
//!
//! # Example
//!
//! ```
//! use tictactoe::{ClickOutcome, Phase, Player, Point, Position, TurnController};
//!
//! let mut controller = TurnController::new();
//!
//! // Click the center of the top-left cell; the human's X lands there
//! // and the opponent replies within the same tick.
//! let outcome = controller.handle_click(Point::new(33, 33));
//! assert_eq!(outcome, ClickOutcome::Placed(Position::TopLeft));
//! controller.tick();
//!
//! assert_eq!(controller.state().phase(), Phase::InProgress);
//! assert_eq!(controller.state().turn(), Player::Human);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod controller;
mod display;
mod game;
mod layout;
mod opponent;
mod render;
mod tui;

pub use app::run;
pub use controller::{ClickOutcome, TurnController};
pub use display::{Display, InputEvent};
pub use game::{Board, GameState, MoveError, Phase, Player, Position, Square, rules};
pub use layout::{BoardLayout, CELL_SIZE, CELL_STRIDE, Point, Rect, WINDOW_SIZE};
pub use opponent::{blocking_move, center_move, choose_move, fallback_move, winning_move};
pub use render::{FrameModel, Overlay};
pub use tui::run_tui;
