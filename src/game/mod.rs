//! Core Connect Four game logic: board representation with gravity, line
//! extraction for win detection, player types, and the game state machine.

mod board;
mod line;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MAX_SIZE, MIN_SIZE};
pub use line::{Line, Orientation, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveResult};
