//! parlor-games: evaluation cores for three console games
//!
//! Goals:
//! - Tic-Tac-Toe board with winner and fullness detection plus a line
//!   heuristic for the computer player
//! - Rock-Paper-Scissors (optionally with Spock and lizard) as a validated
//!   beats relation with weighted computer personalities
//! - Twenty-One hand totals with the dealer's draw-to-17 rule
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use parlor_games::rps::{MoveKind, MoveSet, Outcome};
//! use parlor_games::tictactoe::{forcing_move, Board, Intent, Marker};
//! use parlor_games::twenty_one::Hand;
//!
//! let mut board = Board::new();
//! board.place_raw(1, Marker::X).unwrap();
//! board.place_raw(2, Marker::X).unwrap();
//! let finish = forcing_move(&board, Marker::X, Marker::O, Intent::Offense);
//! assert_eq!(finish.map(|p| p.get()), Some(3));
//!
//! let set = MoveSet::classic();
//! assert_eq!(set.compare(MoveKind::Rock, MoveKind::Scissors), Outcome::Wins);
//!
//! let hand: Hand = "Kh Qs Ad".parse().unwrap();
//! assert_eq!(hand.total(), 21);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin parlor
//! ```
//! Set `PARLOR_SEED` for a reproducible session; logs go to `parlor.log`.

pub mod agents;
pub mod cards;
pub mod deck;
pub mod rps;
pub mod tictactoe;
pub mod tui;
pub mod twenty_one;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
