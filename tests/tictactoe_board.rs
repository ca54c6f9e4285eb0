use parlor_games::tictactoe::{Board, Cell, Marker, MoveError, Position, LINES};
use proptest::prelude::*;

fn any_position() -> impl Strategy<Value = Position> {
    prop::sample::select(Position::ALL.to_vec())
}

fn any_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

#[derive(Debug, Clone)]
enum Op {
    Place(Position, Marker),
    Reset,
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        12 => (any_position(), any_marker()).prop_map(|(p, m)| Op::Place(p, m)),
        1 => Just(Op::Reset),
    ]
}

fn line_owner(board: &Board, line: [Position; 3]) -> Option<Marker> {
    let [a, b, c] = line.map(|p| board.cell(p));
    match a {
        Cell::Marked(m) if a == b && b == c => Some(m),
        _ => None,
    }
}

proptest! {
    #[test]
    fn winner_matches_some_uniform_line(moves in prop::collection::vec((any_position(), any_marker()), 0..20)) {
        let mut board = Board::new();
        for (p, m) in moves {
            let _ = board.place(p, m);
        }
        let owners: Vec<Marker> = LINES.iter().filter_map(|&l| line_owner(&board, l)).collect();
        match board.winner() {
            Some(m) => prop_assert!(owners.contains(&m)),
            None => prop_assert!(owners.is_empty()),
        }
    }

    #[test]
    fn full_exactly_after_nine_placements_since_reset(ops in prop::collection::vec(any_op(), 0..40)) {
        let mut board = Board::new();
        let mut placed = 0usize;
        for op in ops {
            match op {
                Op::Place(p, m) => {
                    if board.place(p, m).is_ok() {
                        placed += 1;
                    }
                }
                Op::Reset => {
                    board.reset();
                    placed = 0;
                }
            }
            prop_assert_eq!(board.is_full(), placed == 9);
            prop_assert_eq!(board.unmarked_positions().len(), 9 - placed);
        }
    }

    #[test]
    fn occupied_cells_never_change(first in any_marker(), second in any_marker(), p in any_position()) {
        let mut board = Board::new();
        board.place(p, first).unwrap();
        let before = board.clone();
        prop_assert_eq!(board.place(p, second), Err(MoveError::Occupied(p)));
        prop_assert_eq!(board, before);
    }
}

#[test]
fn out_of_range_positions_are_rejected() {
    let mut board = Board::new();
    assert!(matches!(board.place_raw(0, Marker::X), Err(MoveError::OutOfRange(_))));
    assert!(matches!(board.place_raw(10, Marker::X), Err(MoveError::OutOfRange(_))));
    assert!(matches!("ten".parse::<Position>(), Err(MoveError::OutOfRange(_))));
    assert_eq!(board.marked_count(), 0);
}

#[test]
fn diagonal_and_column_wins() {
    let mut board = Board::new();
    for p in [3u8, 5, 7] {
        board.place_raw(p, Marker::O).unwrap();
    }
    let (marker, line) = board.winning_line().unwrap();
    assert_eq!(marker, Marker::O);
    assert_eq!(line.map(|p| p.get()), [3, 5, 7]);

    board.reset();
    for p in [2u8, 5, 8] {
        board.place_raw(p, Marker::X).unwrap();
    }
    assert_eq!(board.winner(), Some(Marker::X));
}

#[test]
fn custom_markers_win_too() {
    let star = Marker::new('*').unwrap();
    let mut board = Board::new();
    for p in [4u8, 5, 6] {
        board.place_raw(p, star).unwrap();
    }
    assert_eq!(board.winner(), Some(Marker::STAR));
    assert!(Marker::new(' ').is_err());
}
