//! Tests for the game state machine.

use tictactoe::{GameState, MoveError, Phase, Player, Position};

/// Plays an alternating sequence starting with the human, panicking on
/// any rejected move, and returns the final phase.
fn play(state: &mut GameState, moves: &[Position]) -> Phase {
    let mut phase = state.phase();
    for (i, pos) in moves.iter().enumerate() {
        let player = if i % 2 == 0 {
            Player::Human
        } else {
            Player::Opponent
        };
        phase = state
            .apply_move(*pos, player)
            .unwrap_or_else(|e| panic!("move {i} at {pos} rejected: {e}"));
    }
    phase
}

#[test]
fn test_new_game_initial_state() {
    let state = GameState::new();
    assert_eq!(state.turn(), Player::Human);
    assert_eq!(state.phase(), Phase::InProgress);
    assert!(Position::ALL.iter().all(|&pos| state.board().is_empty(pos)));
}

#[test]
fn test_turn_flips_after_each_move() {
    let mut state = GameState::new();
    state.apply_move(Position::Center, Player::Human).unwrap();
    assert_eq!(state.turn(), Player::Opponent);
    state.apply_move(Position::TopLeft, Player::Opponent).unwrap();
    assert_eq!(state.turn(), Player::Human);
}

#[test]
fn test_row_win_ends_game() {
    let mut state = GameState::new();
    let phase = play(
        &mut state,
        &[
            Position::TopLeft,      // X
            Position::MiddleLeft,   // O
            Position::TopCenter,    // X
            Position::Center,       // O
            Position::TopRight,     // X wins top row
        ],
    );
    assert_eq!(phase, Phase::Won(Player::Human));
    assert_eq!(state.phase(), Phase::Won(Player::Human));
}

#[test]
fn test_opponent_diagonal_win() {
    let mut state = GameState::new();
    let phase = play(
        &mut state,
        &[
            Position::TopLeft,      // X
            Position::TopRight,     // O
            Position::TopCenter,    // X
            Position::Center,       // O
            Position::MiddleLeft,   // X
            Position::BottomLeft,   // O wins anti-diagonal
        ],
    );
    assert_eq!(phase, Phase::Won(Player::Opponent));
}

#[test]
fn test_full_board_without_winner_is_tied() {
    let mut state = GameState::new();
    // X O X / O X X / O X O — no line for either player.
    let phase = play(
        &mut state,
        &[
            Position::TopLeft,      // X
            Position::TopCenter,    // O
            Position::TopRight,     // X
            Position::MiddleLeft,   // O
            Position::Center,       // X
            Position::BottomLeft,   // O
            Position::MiddleRight,  // X
            Position::BottomRight,  // O
            Position::BottomCenter, // X fills the board
        ],
    );
    assert_eq!(phase, Phase::Tied);
}

#[test]
fn test_wrong_player_rejected_without_mutation() {
    let mut state = GameState::new();
    let before = state.clone();

    let result = state.apply_move(Position::Center, Player::Opponent);
    assert_eq!(
        result,
        Err(MoveError::InvalidTurn {
            player: Player::Opponent
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut state = GameState::new();
    state.apply_move(Position::Center, Player::Human).unwrap();
    let before = state.clone();

    let result = state.apply_move(Position::Center, Player::Opponent);
    assert_eq!(
        result,
        Err(MoveError::CellOccupied {
            position: Position::Center
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_finished_game_rejects_moves_without_mutation() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(state.phase(), Phase::Won(Player::Human));
    let before = state.clone();

    // The turn flag still points at the human; only the phase check fires.
    let result = state.apply_move(Position::BottomRight, Player::Human);
    assert_eq!(result, Err(MoveError::GameNotInProgress));
    assert_eq!(state, before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    state.reset();
    assert_eq!(state, GameState::new());
}

#[test]
fn test_reset_is_idempotent() {
    let mut state = GameState::new();
    state.reset();
    state.reset();
    assert_eq!(state, GameState::new());
}
