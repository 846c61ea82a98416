//! A heuristic opponent for playing the board game 'Connect 4'
//!
//! The engine explores the game tree to a bounded depth with minimax and
//! alpha-beta pruning, scoring positions it cannot resolve with a
//! window-based heuristic. Running the same search with the roles inverted
//! doubles as a hint advisor for the human player.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::game::{Difficulty, Game};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new(Difficulty::Medium);
//! game.play_human(3)?;
//! let reply = game.play_machine()?;
//!
//! assert!(reply.column < connect4_engine::WIDTH);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod outcome;

pub mod heuristic;

pub mod search;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that decides a game
pub const WIN_LENGTH: usize = 4;

// ensure that a winning alignment fits on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
