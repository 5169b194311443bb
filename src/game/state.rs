//! Game state and the move-application state machine.

use super::rules;
use super::types::{Board, Player, Square};
use super::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal or non-terminal status of the game.
///
/// A terminal phase doubles as the awaiting-reset state: the reset
/// affordance is live exactly while the phase is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with a full board and no winner.
    Tied,
}

impl Phase {
    /// Returns true if the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

/// Reasons a move is rejected.
///
/// All three are expected, recoverable, user-caused conditions; the
/// caller discards the attempted move and state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The mark does not match the player to move.
    #[display("not {player}'s turn")]
    InvalidTurn {
        /// The player who attempted the move.
        player: Player,
    },
    /// The target square already holds a mark.
    #[display("{position} is already taken")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },
    /// The game has ended; no further moves are accepted.
    #[display("game is not in progress")]
    GameNotInProgress,
}

/// The single source of truth for a game in progress.
///
/// Owns the board, the turn flag, and the phase. Everything the
/// display draws is derived from this value each frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    phase: Phase,
}

impl GameState {
    /// Creates a fresh game: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Human,
            phase: Phase::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose mark may legally be placed next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Applies one move and advances the state machine.
    ///
    /// On success the square is set, win and tie detection run, and
    /// either the phase becomes terminal or the turn flips. Returns
    /// the resulting phase.
    ///
    /// # Errors
    ///
    /// * [`MoveError::InvalidTurn`] if `player` is not the player to move.
    /// * [`MoveError::CellOccupied`] if the target square is taken.
    /// * [`MoveError::GameNotInProgress`] if the game has ended.
    ///
    /// All failures leave the state exactly as it was.
    #[instrument(skip(self), fields(turn = %self.turn, phase = ?self.phase))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Result<Phase, MoveError> {
        if player != self.turn {
            return Err(MoveError::InvalidTurn { player });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied { position: pos });
        }
        if self.phase.is_terminal() {
            return Err(MoveError::GameNotInProgress);
        }

        self.board.set(pos, Square::Occupied(player));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.phase = Phase::Won(winner);
        } else if rules::is_full(&self.board) {
            self.phase = Phase::Tied;
        } else {
            self.turn = player.other();
        }

        debug!(
            position = %pos,
            player = %player,
            phase = ?self.phase,
            board = %self.board.display(),
            "Move applied"
        );
        Ok(self.phase)
    }

    /// Returns the game to its initial state.
    ///
    /// Idempotent when called on a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
