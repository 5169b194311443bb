//! Game rules.
//!
//! Pure functions for evaluating board state according to tic-tac-toe
//! rules. Rules are separated from board storage so the opponent
//! heuristics and the state machine share one definition of the lines.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};
