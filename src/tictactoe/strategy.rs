//! Heuristic move selection for the computer player.
//!
//! The heuristic never searches ahead: it looks for a line that is one
//! marker away from completion, either to finish it ([`Intent::Offense`]) or
//! to block it ([`Intent::Defense`]). When no such line exists the caller
//! falls back to [`fallback_move`].

use super::board::{Board, Cell, Marker, Position, LINES};
use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Complete a line holding two of our own markers.
    Offense,
    /// Block a line holding two opponent markers.
    Defense,
}

/// Difficulty tiers for the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Difficulty {
    /// Random unmarked cell every turn.
    Easy,
    /// Win if possible, else take the center, else block, else random.
    #[default]
    Medium,
    /// Win if possible, else block, else take the center, else random.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// The empty cell of the first line (in [`LINES`] order) that qualifies for `intent`.
///
/// ```
/// use parlor_games::tictactoe::{forcing_move, Board, Intent, Marker, Position};
///
/// let mut board = Board::new();
/// board.place_raw(1, Marker::X).unwrap();
/// board.place_raw(2, Marker::X).unwrap();
/// let hit = forcing_move(&board, Marker::X, Marker::O, Intent::Offense);
/// assert_eq!(hit, Some(Position::try_from(3u8).unwrap()));
/// ```
pub fn forcing_move(
    board: &Board,
    me: Marker,
    opponent: Marker,
    intent: Intent,
) -> Option<Position> {
    let (own, other) = match intent {
        Intent::Offense => (me, opponent),
        Intent::Defense => (opponent, me),
    };
    LINES.iter().find_map(|line| {
        let cells = line.map(|p| board.cell(p));
        let owned = cells.iter().filter(|c| **c == Cell::Marked(own)).count();
        let blocked = cells.iter().any(|c| *c == Cell::Marked(other));
        if owned != 2 || blocked {
            return None;
        }
        line.iter().copied().find(|&p| board.cell(p).is_empty())
    })
}

/// Center if free, otherwise a uniformly random unmarked cell.
pub fn fallback_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if board.cell(Position::CENTER).is_empty() {
        return Some(Position::CENTER);
    }
    random_move(board, rng)
}

pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.unmarked_positions().choose(rng).copied()
}

/// Pick a move for `me` according to `difficulty`. `None` only on a full board.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    me: Marker,
    opponent: Marker,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let center = || board.cell(Position::CENTER).is_empty().then_some(Position::CENTER);
    let offense = || forcing_move(board, me, opponent, Intent::Offense);
    let defense = || forcing_move(board, me, opponent, Intent::Defense);
    let picked = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => offense().or_else(center).or_else(defense),
        Difficulty::Hard => offense().or_else(defense).or_else(center),
    };
    picked.or_else(|| random_move(board, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_with(x: &[u8], o: &[u8]) -> Board {
        let mut b = Board::new();
        for &p in x {
            b.place_raw(p, Marker::X).unwrap();
        }
        for &p in o {
            b.place_raw(p, Marker::O).unwrap();
        }
        b
    }

    fn pos(n: u8) -> Position {
        Position::try_from(n).unwrap()
    }

    #[test]
    fn offense_completes_own_line() {
        let b = board_with(&[1, 2], &[]);
        assert_eq!(forcing_move(&b, Marker::X, Marker::O, Intent::Offense), Some(pos(3)));
    }

    #[test]
    fn defense_blocks_opponent_line() {
        let b = board_with(&[1, 5], &[9]);
        assert_eq!(forcing_move(&b, Marker::O, Marker::X, Intent::Defense), None);
        let b = board_with(&[3, 5], &[1]);
        assert_eq!(forcing_move(&b, Marker::O, Marker::X, Intent::Defense), Some(pos(7)));
    }

    #[test]
    fn blocked_line_does_not_qualify() {
        let b = board_with(&[1, 2], &[3]);
        assert_eq!(forcing_move(&b, Marker::X, Marker::O, Intent::Offense), None);
    }

    #[test]
    fn first_line_in_order_wins_ties() {
        // Both the top row and the left column are one short.
        let b = board_with(&[1, 2, 4], &[]);
        assert_eq!(forcing_move(&b, Marker::X, Marker::O, Intent::Offense), Some(pos(3)));
    }

    #[test]
    fn fallback_prefers_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let b = board_with(&[1], &[]);
        assert_eq!(fallback_move(&b, &mut rng), Some(Position::CENTER));
        let b = board_with(&[5], &[]);
        let p = fallback_move(&b, &mut rng).unwrap();
        assert!(b.cell(p).is_empty());
    }

    #[test]
    fn medium_takes_center_before_blocking() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let b = board_with(&[1, 2], &[]);
        let medium = choose_move(&b, Marker::O, Marker::X, Difficulty::Medium, &mut rng);
        assert_eq!(medium, Some(Position::CENTER));
        let hard = choose_move(&b, Marker::O, Marker::X, Difficulty::Hard, &mut rng);
        assert_eq!(hard, Some(pos(3)));
    }

    #[test]
    fn full_board_has_no_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let b = board_with(&[1, 2, 5, 6, 7], &[3, 4, 8, 9]);
        assert!(b.is_full());
        for d in Difficulty::ALL {
            assert_eq!(choose_move(&b, Marker::O, Marker::X, d, &mut rng), None);
        }
    }
}
