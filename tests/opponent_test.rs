//! Tests pinning the opponent's heuristic priority and scan order.

use tictactoe::{Board, Player, Position, Square, choose_move};

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for (index, player) in marks {
        let pos = Position::from_index(*index).expect("index in range");
        board.set(pos, Square::Occupied(*player));
    }
    board
}

#[test]
fn test_winning_move_takes_priority() {
    // Opponent holds the first two squares of the top row: completing
    // it outranks blocking, center, and fallback.
    let board = board_with(&[(0, Player::Opponent), (1, Player::Opponent)]);
    assert_eq!(choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_blocking_move_when_no_win_available() {
    // Human threatens the top row and the opponent has no win of its
    // own: block at the third square.
    let board = board_with(&[(0, Player::Human), (1, Player::Human)]);
    assert_eq!(choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_center_when_no_win_or_block() {
    assert_eq!(choose_move(&Board::new()), Some(Position::Center));
}

#[test]
fn test_fallback_takes_lowest_open_square() {
    // Human marks share no line, the opponent holds only the center,
    // so no win, no block, no center: the opponent takes the
    // lowest-indexed open square.
    let board = board_with(&[
        (1, Player::Human),
        (3, Player::Human),
        (4, Player::Opponent),
    ]);
    assert_eq!(choose_move(&board), Some(Position::TopLeft));
}

#[test]
fn test_win_outranks_block() {
    // Both players threaten a line; the opponent finishes its own
    // instead of blocking.
    let board = board_with(&[
        (0, Player::Opponent),
        (1, Player::Opponent),
        (6, Player::Human),
        (7, Player::Human),
    ]);
    assert_eq!(choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_block_outranks_center() {
    let board = board_with(&[(0, Player::Human), (1, Player::Human)]);
    // Center is open, but the block comes first.
    assert_ne!(choose_move(&board), Some(Position::Center));
}

#[test]
fn test_ascending_line_scan_breaks_ties() {
    // Opponent can complete either the top row (scanned first) or the
    // left column: the row's open square wins.
    let board = board_with(&[
        (0, Player::Opponent),
        (1, Player::Opponent),
        (3, Player::Opponent),
        (8, Player::Human),
        (5, Player::Human),
    ]);
    assert_eq!(choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_block_scans_lines_in_order_too() {
    // Human threatens both the middle row and the bottom row; the
    // middle row is the earlier line, so it gets the block.
    let board = board_with(&[
        (3, Player::Human),
        (4, Player::Human),
        (6, Player::Human),
        (7, Player::Human),
    ]);
    assert_eq!(choose_move(&board), Some(Position::MiddleRight));
}

#[test]
fn test_full_board_yields_no_move() {
    // X O X / O X X / O X O — the one board shape the controller never
    // hands over, because tie detection ends the game first.
    let board = board_with(&[
        (0, Player::Human),
        (1, Player::Opponent),
        (2, Player::Human),
        (3, Player::Opponent),
        (4, Player::Human),
        (5, Player::Human),
        (6, Player::Opponent),
        (7, Player::Human),
        (8, Player::Opponent),
    ]);
    assert_eq!(choose_move(&board), None);
}
