use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// A cell on the board, numbered 1..=9 left to right, top to bottom.
///
/// ```
/// use parlor_games::tictactoe::Position;
///
/// assert_eq!(Position::try_from(5u8).unwrap(), Position::CENTER);
/// assert!(Position::try_from(10u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const CENTER: Position = Position(5);

    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    pub const fn get(self) -> u8 {
        self.0
    }

    const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=9).contains(&value) {
            Ok(Position(value))
        } else {
            Err(MoveError::OutOfRange(value.to_string()))
        }
    }
}

impl FromStr for Position {
    type Err = MoveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        t.parse::<u8>()
            .map_err(|_| MoveError::OutOfRange(t.to_string()))
            .and_then(Position::try_from)
    }
}

/// Placement rejected by the board. Nothing is mutated when this is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("position out of range 1-9: '{0}'")]
    OutOfRange(String),
    #[error("position {0} is already marked")]
    Occupied(Position),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MarkerError {
    #[error("marker must be a single visible character, got '{0}'")]
    Invalid(String),
}

/// A player's symbol. Any single non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    pub const X: Marker = Marker('X');
    pub const O: Marker = Marker('O');
    pub const STAR: Marker = Marker('*');

    pub fn new(c: char) -> Result<Self, MarkerError> {
        if c.is_whitespace() || c.is_control() {
            return Err(MarkerError::Invalid(c.to_string()));
        }
        Ok(Marker(c))
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Marker {
    type Err = MarkerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Marker::new(c),
            _ => Err(MarkerError::Invalid(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position(1), Position(2), Position(3)],
    [Position(4), Position(5), Position(6)],
    [Position(7), Position(8), Position(9)],
    [Position(1), Position(4), Position(7)],
    [Position(2), Position(5), Position(8)],
    [Position(3), Position(6), Position(9)],
    [Position(1), Position(5), Position(9)],
    [Position(3), Position(5), Position(7)],
];

/// A 3x3 tic-tac-toe board.
///
/// ```
/// use parlor_games::tictactoe::{Board, Marker, Position};
///
/// let mut board = Board::new();
/// for p in [1u8, 5, 9] {
///     board.place(Position::try_from(p).unwrap(), Marker::X).unwrap();
/// }
/// assert_eq!(board.winner(), Some(Marker::X));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Mark an empty cell.
    pub fn place(&mut self, position: Position, marker: Marker) -> Result<(), MoveError> {
        let cell = &mut self.cells[position.index()];
        if !cell.is_empty() {
            return Err(MoveError::Occupied(position));
        }
        *cell = Cell::Marked(marker);
        debug!(%position, %marker, "marker placed");
        Ok(())
    }

    /// Like [`Board::place`] but takes an unvalidated position number.
    pub fn place_raw(&mut self, position: u8, marker: Marker) -> Result<(), MoveError> {
        self.place(Position::try_from(position)?, marker)
    }

    /// Empty positions in ascending order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL.iter().copied().filter(|&p| self.cell(p).is_empty()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The marker of the first uniformly marked line, if any.
    pub fn winner(&self) -> Option<Marker> {
        self.winning_line().map(|(marker, _)| marker)
    }

    /// Like [`Board::winner`], also returning the line that won.
    #[instrument(level = "trace", skip(self))]
    pub fn winning_line(&self) -> Option<(Marker, [Position; 3])> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|p| self.cell(p));
            match a {
                Cell::Marked(m) if a == b && b == c => Some((m, line)),
                _ => None,
            }
        })
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> Position {
        Position::try_from(n).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let b = Board::new();
        assert_eq!(b.unmarked_positions(), Position::ALL.to_vec());
        assert!(!b.is_full());
        assert_eq!(b.winner(), None);
    }

    #[test]
    fn place_rejects_occupied_cell_without_mutation() {
        let mut b = Board::new();
        b.place(pos(4), Marker::X).unwrap();
        assert_eq!(b.place(pos(4), Marker::O), Err(MoveError::Occupied(pos(4))));
        assert_eq!(b.cell(pos(4)), Cell::Marked(Marker::X));
    }

    #[test]
    fn place_raw_rejects_out_of_range() {
        let mut b = Board::new();
        assert!(matches!(b.place_raw(0, Marker::X), Err(MoveError::OutOfRange(_))));
        assert!(matches!(b.place_raw(10, Marker::X), Err(MoveError::OutOfRange(_))));
        assert_eq!(b.marked_count(), 0);
    }

    #[test]
    fn position_parses_from_input() {
        assert_eq!(" 7 ".parse::<Position>().unwrap(), pos(7));
        assert!("seven".parse::<Position>().is_err());
        assert!("0".parse::<Position>().is_err());
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            let mut b = Board::new();
            for p in line {
                b.place(p, Marker::O).unwrap();
            }
            assert_eq!(b.winning_line(), Some((Marker::O, line)));
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let mut b = Board::new();
        b.place(pos(1), Marker::X).unwrap();
        b.place(pos(2), Marker::X).unwrap();
        b.place(pos(3), Marker::O).unwrap();
        assert_eq!(b.winner(), None);
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut b = Board::new();
        for p in Position::ALL {
            b.place(p, Marker::X).unwrap();
        }
        assert!(b.is_full());
        b.reset();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn marker_must_be_one_visible_char() {
        assert_eq!("*".parse::<Marker>().unwrap().as_char(), '*');
        assert!(" ".parse::<Marker>().is_err());
        assert!("XO".parse::<Marker>().is_err());
        assert!("".parse::<Marker>().is_err());
    }
}
