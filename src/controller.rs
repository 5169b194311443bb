//! Turn controller: routes clicks, runs the opponent, snapshots frames.

use crate::game::{GameState, MoveError, Phase, Player, Position};
use crate::layout::{BoardLayout, Point};
use crate::opponent;
use crate::render::FrameModel;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Outcome of routing one pointer click.
///
/// These are event values for the display layer to surface (or not);
/// none of them is an error the caller has to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The human's mark was placed at the position.
    Placed(Position),
    /// The reset button was hit; the game returned to its initial state.
    Reset,
    /// Ignored: it is the opponent's turn.
    NotYourTurn,
    /// Ignored: the square is already taken.
    SpaceTaken(Position),
    /// Ignored: the click landed outside every active region.
    Missed,
}

/// Orchestrates whose move executes next.
///
/// Owns the [`GameState`] and the board's hit regions. The display
/// feeds it clicks and a per-frame tick; it queries and mutates the
/// state and reports what happened as [`ClickOutcome`] values.
#[derive(Debug, Getters)]
pub struct TurnController {
    state: GameState,
    layout: BoardLayout,
}

impl TurnController {
    /// Creates a controller over a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            layout: BoardLayout::new(),
        }
    }

    /// Routes a pointer click in window space.
    ///
    /// While the game is over, only the reset button reacts. While the
    /// game is in progress, a click places the human's mark if it is
    /// their turn and the square under the pointer is open; anything
    /// else is ignored.
    #[instrument(skip(self), fields(phase = ?self.state.phase()))]
    pub fn handle_click(&mut self, point: Point) -> ClickOutcome {
        if self.state.phase().is_terminal() {
            if self.layout.reset_button().contains(point) {
                self.state.reset();
                return ClickOutcome::Reset;
            }
            debug!("Click ignored: game is over");
            return ClickOutcome::Missed;
        }

        if self.state.turn() != Player::Human {
            debug!("Click ignored: not the human's turn");
            return ClickOutcome::NotYourTurn;
        }

        let Some(pos) = self.layout.cell_at(point) else {
            return ClickOutcome::Missed;
        };

        match self.state.apply_move(pos, Player::Human) {
            Ok(_) => ClickOutcome::Placed(pos),
            Err(MoveError::CellOccupied { position }) => {
                debug!(position = %position, "Click ignored: square taken");
                ClickOutcome::SpaceTaken(position)
            }
            // Turn and phase were checked above; nothing else to surface.
            Err(err) => {
                debug!(error = %err, "Click ignored");
                ClickOutcome::Missed
            }
        }
    }

    /// Advances the game by one frame.
    ///
    /// If the turn flag points at the opponent and the game is still
    /// in progress, the opponent moves now, synchronously, so its
    /// reply lands in the same tick as the human move that triggered
    /// it.
    pub fn tick(&mut self) {
        if self.state.phase() == Phase::InProgress && self.state.turn() == Player::Opponent {
            self.run_opponent_turn();
        }
    }

    /// Executes the opponent's move via the heuristic chain.
    ///
    /// An in-progress game always has an open square — tie detection
    /// ends the game on the move that fills the board — so a missing
    /// move is a state-machine invariant violation, not a normal path.
    #[instrument(skip(self))]
    fn run_opponent_turn(&mut self) {
        let pos = opponent::choose_move(self.state.board())
            .expect("in-progress game must have an open square for the opponent");
        self.state
            .apply_move(pos, Player::Opponent)
            .expect("heuristic move was validated against the board");
        debug!(position = %pos, "Opponent moved");
    }

    /// Snapshots the current frame for the display.
    pub fn frame(&self) -> FrameModel {
        FrameModel::snapshot(&self.state, self.layout.reset_button())
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
