//! Render model: the disposable per-frame projection of game state.
//!
//! The core never draws. Each tick it snapshots [`GameState`] into a
//! [`FrameModel`] and hands it to the display, which owns pixels,
//! glyphs, and widgets. Nothing here is authoritative.

use crate::game::{GameState, Phase, Square};
use crate::layout::Rect;
use serde::{Deserialize, Serialize};

/// Game-over overlay: message text plus the reset affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    /// Winner announcement or tie message.
    pub message: String,
    /// Where the reset button accepts clicks, in window space.
    pub reset_button: Rect,
}

/// Everything the display needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameModel {
    /// The nine marks in board order.
    pub cells: [Square; 9],
    /// Present only when the game has ended.
    pub overlay: Option<Overlay>,
}

impl FrameModel {
    /// Snapshots the game state, attaching the overlay in terminal
    /// phases.
    pub fn snapshot(state: &GameState, reset_button: Rect) -> Self {
        let overlay = match state.phase() {
            Phase::InProgress => None,
            Phase::Won(player) => Some(Overlay {
                message: format!("{player} wins!"),
                reset_button,
            }),
            Phase::Tied => Some(Overlay {
                message: "Tie!".to_string(),
                reset_button,
            }),
        };
        Self {
            cells: *state.board().squares(),
            overlay,
        }
    }
}
