//! Core Mancala game logic: the board with its sowing, capture, and
//! extra-turn rules, the player sides, the game state machine, and the
//! successor enumeration used by the search.

mod board;
mod player;
mod state;
mod successors;

pub use board::{Board, PITS, SEEDS_PER_PIT, TOTAL_SEEDS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
pub use successors::{successors, Successor};
