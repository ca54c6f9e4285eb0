use super::board::{Board, Marker, MoveError, Position};
use rand::Rng;
use std::fmt;
use tracing::info;

/// Points needed to win a match unless configured otherwise.
pub const DEFAULT_POINTS_TO_WIN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub const fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Computer => write!(f, "computer"),
        }
    }
}

/// Who opens each round of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum FirstMover {
    #[default]
    Human,
    Computer,
    /// Decided by a coin flip when the match starts.
    Random,
}

impl FirstMover {
    pub fn label(self) -> &'static str {
        match self {
            FirstMover::Human => "Human",
            FirstMover::Computer => "Computer",
            FirstMover::Random => "Random",
        }
    }

    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Seat {
        match self {
            FirstMover::Human => Seat::Human,
            FirstMover::Computer => Seat::Computer,
            FirstMover::Random => {
                if rng.random_bool(0.5) {
                    Seat::Human
                } else {
                    Seat::Computer
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won(Seat),
    Tie,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Seat),
    #[error("the round is over")]
    RoundOver,
    #[error("the match is already decided")]
    MatchOver,
    #[error("both players cannot use marker '{0}'")]
    SameMarker(Marker),
}

/// The marker the computer takes given the human's choice.
pub fn computer_marker_for(human: Marker) -> Marker {
    if human == Marker::O {
        Marker::STAR
    } else {
        Marker::O
    }
}

/// A first-to-N match between a human and the computer.
///
/// The session owns the board and both markers; the computer's choice of
/// cell comes from outside (see [`crate::agents::TicTacToeBot`]).
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    human: Marker,
    computer: Marker,
    human_score: u32,
    computer_score: u32,
    ties: u32,
    points_to_win: u32,
    first: Seat,
    current: Seat,
    status: RoundStatus,
}

impl Session {
    pub fn new(human: Marker, first: Seat, points_to_win: u32) -> Self {
        let computer = computer_marker_for(human);
        Self {
            board: Board::new(),
            human,
            computer,
            human_score: 0,
            computer_score: 0,
            ties: 0,
            points_to_win: points_to_win.max(1),
            first,
            current: first,
            status: RoundStatus::InProgress,
        }
    }

    pub fn with_markers(
        human: Marker,
        computer: Marker,
        first: Seat,
        points_to_win: u32,
    ) -> Result<Self, SessionError> {
        if human == computer {
            return Err(SessionError::SameMarker(human));
        }
        let mut session = Self::new(human, first, points_to_win);
        session.computer = computer;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn marker(&self, seat: Seat) -> Marker {
        match seat {
            Seat::Human => self.human,
            Seat::Computer => self.computer,
        }
    }

    pub fn seat_of(&self, marker: Marker) -> Option<Seat> {
        if marker == self.human {
            Some(Seat::Human)
        } else if marker == self.computer {
            Some(Seat::Computer)
        } else {
            None
        }
    }

    pub fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human_score,
            Seat::Computer => self.computer_score,
        }
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn first(&self) -> Seat {
        self.first
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Mark `position` for `seat` and advance the round.
    pub fn play(&mut self, seat: Seat, position: Position) -> Result<RoundStatus, SessionError> {
        if self.match_winner().is_some() {
            return Err(SessionError::MatchOver);
        }
        if self.status != RoundStatus::InProgress {
            return Err(SessionError::RoundOver);
        }
        if seat != self.current {
            return Err(SessionError::NotYourTurn(seat));
        }
        self.board.place(position, self.marker(seat))?;

        self.status = match self.board.winner().and_then(|m| self.seat_of(m)) {
            Some(winner) => {
                match winner {
                    Seat::Human => self.human_score += 1,
                    Seat::Computer => self.computer_score += 1,
                }
                info!(%winner, human = self.human_score, computer = self.computer_score, "round won");
                RoundStatus::Won(winner)
            }
            None if self.board.is_full() => {
                self.ties += 1;
                info!("round tied");
                RoundStatus::Tie
            }
            None => {
                self.current = seat.other();
                RoundStatus::InProgress
            }
        };
        Ok(self.status)
    }

    /// The seat that reached the target score, if any.
    pub fn match_winner(&self) -> Option<Seat> {
        if self.human_score >= self.points_to_win {
            Some(Seat::Human)
        } else if self.computer_score >= self.points_to_win {
            Some(Seat::Computer)
        } else {
            None
        }
    }

    /// Clear the board for another round; the same seat opens.
    /// Once the match is decided, moves are refused until [`Session::new_match`].
    pub fn next_round(&mut self) {
        self.board.reset();
        self.current = self.first;
        self.status = RoundStatus::InProgress;
    }

    /// Start over with zero scores and a new opener.
    pub fn new_match(&mut self, first: Seat) {
        self.human_score = 0;
        self.computer_score = 0;
        self.ties = 0;
        self.first = first;
        self.next_round();
    }
}
