//! Tic-Tac-Toe: the 9-cell board with its 8 winning lines, the computer's
//! line heuristic, and a first-to-N match between a human and the computer.

mod board;
mod session;
mod strategy;

pub use board::{Board, Cell, Marker, MarkerError, MoveError, Position, LINES};
pub use session::{
    computer_marker_for, FirstMover, RoundStatus, Seat, Session, SessionError,
    DEFAULT_POINTS_TO_WIN,
};
pub use strategy::{choose_move, fallback_move, forcing_move, random_move, Difficulty, Intent};
