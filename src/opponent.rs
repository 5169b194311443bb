//! The computer opponent.
//!
//! A fixed priority chain of four heuristics, not a search: take a
//! winning move, block the human's winning move, take the center,
//! otherwise take the first open square. Priority order and line scan
//! order are deliberate — in ambiguous boards (two candidate lines)
//! the earlier line always wins the tie-break — so both are pinned by
//! tests.

use crate::game::rules::WINNING_LINES;
use crate::game::{Board, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Finds the empty square that completes a line holding two of
/// `player`'s marks, scanning lines in declaration order.
fn completing_move(board: &Board, player: Player) -> Option<Position> {
    for line in WINNING_LINES {
        let mut owned = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos) {
                Square::Occupied(p) if p == player => owned += 1,
                Square::Empty => open = Some(pos),
                Square::Occupied(_) => {}
            }
        }
        if owned == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }
    None
}

/// A move that wins the game for the opponent, if one exists.
pub fn winning_move(board: &Board) -> Option<Position> {
    completing_move(board, Player::Opponent)
}

/// A move that blocks the human from winning next turn, if one exists.
pub fn blocking_move(board: &Board) -> Option<Position> {
    completing_move(board, Player::Human)
}

/// The center square, if open.
pub fn center_move(board: &Board) -> Option<Position> {
    board.is_empty(Position::Center).then_some(Position::Center)
}

/// The first open square in board order.
pub fn fallback_move(board: &Board) -> Option<Position> {
    Position::iter().find(|&pos| board.is_empty(pos))
}

/// Picks the opponent's move: win, block, center, first open square.
///
/// Returns `None` only on a full board, which a correctly maintained
/// [`GameState`](crate::GameState) never presents — tie detection ends
/// the game on the move that fills the board.
#[instrument(skip(board))]
pub fn choose_move(board: &Board) -> Option<Position> {
    let pos = winning_move(board)
        .or_else(|| blocking_move(board))
        .or_else(|| center_move(board))
        .or_else(|| fallback_move(board))?;
    debug!(position = %pos, "Opponent chose position");
    Some(pos)
}
