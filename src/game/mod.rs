//! Pure game logic: board, positions, rules, and the state machine.

mod position;
pub mod rules;
mod state;
mod types;

pub use position::Position;
pub use state::{GameState, MoveError, Phase};
pub use types::{Board, Player, Square};
