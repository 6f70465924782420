//! Falling-block puzzle engine: shape catalog, pieces, board and game controller.
//!
//! The crate has no I/O. A front end drives a [`GameController`] with elapsed
//! time and input, and reads the board, the active piece and the score back
//! for drawing.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
