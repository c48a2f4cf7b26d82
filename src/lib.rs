//! A perfect agent for playing the board game 'Tic-Tac-Toe'
//!
//! This agent uses an exhaustive minimax search over the full game tree
//! to find the optimal move for either player in any position.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{board::{Board, Player}, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_str("XX_/OO_/___")?;
//! let mut solver = Solver::new(board.size());
//! let best_move = solver.best_move(&mut board, Player::PlayerOne);
//!
//! assert_eq!(best_move, Some(2));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

use std::time::Duration;

pub mod board;

pub mod lines;

pub mod solver;


pub use board::{Board, Cell, GameState, Player};
pub use lines::{generate_win_combinations, Lines};
pub use solver::Solver;

/// The side length of the board played by the CLI
pub const BOARD_SIZE: usize = 3;

/// The score of a position won by player one (negated for player two)
pub const WIN_SCORE: i32 = 10;

/// The pause between moves when the CLI plays itself
pub const MOVE_DELAY: Duration = Duration::from_secs(1);

// the search is unpruned, anything past 3x3 will never finish
const_assert!(BOARD_SIZE >= 1 && BOARD_SIZE <= 3);
