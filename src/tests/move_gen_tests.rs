use board_game_traits::Color;

use crate::position::{self, Direction, Position, Square};
use crate::tests::{position_on, random_game_positions, UNIFORM_START_8X8, VALUES_8X8};

/// White to play at (3, 3) captures in three directions, but not north
const MULTI_CAPTURE_8X8: &str =
    "12345678/23456789/345o7891/4567ooO2/567oo123/678O1O34/78912345/89123456";

fn moves_for(position: &Position, color: Color) -> Vec<Square> {
    let mut moves = vec![];
    position.generate_moves(color, &mut moves);
    moves
}

#[test]
fn start_position_moves_test() {
    let position = Position::from_starting_layout(UNIFORM_START_8X8).unwrap();
    assert_eq!(
        moves_for(&position, Color::White),
        vec![
            Square::new(2, 4),
            Square::new(3, 5),
            Square::new(4, 2),
            Square::new(5, 3)
        ]
    );
    assert_eq!(
        moves_for(&position, Color::Black),
        vec![
            Square::new(2, 3),
            Square::new(3, 2),
            Square::new(4, 5),
            Square::new(5, 4)
        ]
    );
}

#[test]
fn moves_are_row_major_test() {
    for seed in 0..10 {
        for position in random_game_positions(8, 8, seed) {
            for color in [Color::White, Color::Black] {
                let moves = moves_for(&position, color);
                assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
                assert_eq!(moves.is_empty(), !position.has_legal_move(color));
            }
        }
    }
}

#[test]
fn legality_is_color_symmetric_test() {
    for seed in 0..10 {
        for position in random_game_positions(6, 6, seed) {
            let flipped = position.flip_colors();
            for square in position.squares() {
                assert_eq!(
                    position::is_legal(&position, square, Color::White),
                    position::is_legal(&flipped, square, Color::Black),
                    "{:?}\n{}",
                    position,
                    square
                );
            }
        }
    }
}

#[test]
fn off_board_and_occupied_squares_are_illegal_test() {
    let position = Position::from_starting_layout(UNIFORM_START_8X8).unwrap();
    for color in [Color::White, Color::Black] {
        assert!(!position::is_legal(&position, Square::new(8, 3), color));
        assert!(!position::is_legal(&position, Square::new(2, 8), color));
        assert!(!position::is_legal(&position, Square::new(3, 3), color));
        assert!(!position::is_legal(&position, Square::new(3, 4), color));
    }
}

#[test]
fn adjacent_own_piece_is_not_a_capture_test() {
    let position = position_on("123/456/789", "1O3/456/789");
    assert!(!position::is_legal(&position, Square::new(0, 0), Color::White));
}

#[test]
fn run_must_be_bracketed_test() {
    let bracketed = position_on("123/456/789", "1oO/456/789");
    assert!(position::is_legal(&bracketed, Square::new(0, 0), Color::White));
    assert!(!position::is_legal(&bracketed, Square::new(0, 0), Color::Black));

    let ends_at_edge = position_on("123/456/789", "1oo/456/789");
    assert!(!position::is_legal(&ends_at_edge, Square::new(0, 0), Color::White));

    let ends_at_empty = position_on("123/456/789", "1o3/456/789");
    assert!(!position::is_legal(&ends_at_empty, Square::new(0, 0), Color::White));
}

#[test]
fn capture_without_run_is_a_no_op_test() {
    let mut position = position_on("123/456/789", "1oo/456/789").with_scores(3, 5);
    let before = position.clone();
    for direction in Direction::ALL {
        assert_eq!(
            position::capture(&mut position, Square::new(0, 0), Color::White, direction),
            0
        );
    }
    assert_eq!(position, before);
}

#[test]
fn capture_single_direction_test() {
    let mut position = position_on("123/456/789", "1oO/456/789");
    assert_eq!(
        position::capture(&mut position, Square::new(0, 0), Color::White, Direction::East),
        2
    );
    assert_eq!(position[Square::new(0, 1)], Some(Color::White));
    // The origin square itself is not placed by a capture
    assert_eq!(position[Square::new(0, 0)], None);
}

#[test]
fn capture_per_direction_test() {
    let position = position_on(VALUES_8X8, MULTI_CAPTURE_8X8);
    let origin = Square::new(3, 3);
    let expected = [
        (Direction::North, 0),
        (Direction::East, 17),
        (Direction::South, 8),
        (Direction::SouthEast, 9),
        (Direction::West, 0),
    ];
    for (direction, gained) in expected {
        let mut position = position.clone();
        assert_eq!(
            position::capture(&mut position, origin, Color::White, direction),
            gained,
            "{:?}",
            direction
        );
    }
}

#[test]
fn multi_direction_move_test() {
    let mut position = position_on(VALUES_8X8, MULTI_CAPTURE_8X8).with_scores(10, 20);
    let gained = position.do_move(Square::new(3, 3), Color::White);

    // 34 captured over three directions, plus 7 for the placed square
    assert_eq!(gained, 41);
    assert_eq!(position.score(Color::White), 51);
    assert_eq!(position.score(Color::Black), -14);

    for square in [
        Square::new(3, 3),
        Square::new(3, 4),
        Square::new(3, 5),
        Square::new(4, 3),
        Square::new(4, 4),
    ] {
        assert_eq!(position[square], Some(Color::White), "{}", square);
    }
    assert_eq!(position[Square::new(2, 3)], Some(Color::Black));
}

#[test]
fn move_conserves_total_score_test() {
    for seed in 0..10 {
        let positions = random_game_positions(8, 8, seed);
        for pair in positions.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let placed = before
                .squares()
                .find(|square| before[*square].is_none() && after[*square].is_some())
                .unwrap();
            let total = |position: &Position| {
                position.score(Color::White) + position.score(Color::Black)
            };
            assert_eq!(total(after), total(before) + before.value(placed));
        }
    }
}
