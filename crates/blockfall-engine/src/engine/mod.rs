//! Game flow on top of the core data structures.
//!
//! - [`GameController`] - board, falling piece, fall timer and state machine
//! - [`GameState`] - `Playing` or `GameOver`
//! - [`GameStats`] - score, locked pieces and cleared lines
//!
//! # Game Flow
//!
//! 1. [`GameController::new`] spawns a random piece on an empty board
//! 2. The caller feeds elapsed time to [`GameController::tick`] and forwards
//!    player input (move, soft drop, rotate)
//! 3. A blocked downward move locks the piece, clears full rows and spawns
//!    the next piece
//! 4. If the new piece collides where it spawns, the game is over until
//!    [`GameController::reset`]

pub use self::{controller::*, game_stats::*};

mod controller;
mod game_stats;
